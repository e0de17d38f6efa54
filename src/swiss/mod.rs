pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::{pair_round, swiss_pairings};
pub use standings::calculate_standings;
pub use types::{Bye, LedgerPolicy, OddPlayerPolicy, Pairing, RoundPairings, StandingsEntry};
