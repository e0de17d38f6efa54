pub mod errors;
pub mod models;

pub use errors::TournamentError;
pub use models::*;
