use anyhow::Result;

use crate::database::{self, DbConn, DbPool};
use crate::domain::{MatchRecord, Player, PlayerId};

use super::TournamentStore;

/// SQLite-backed store; foreign keys and the self-match CHECK live in the schema
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database file, creating the schema on first use
    pub fn open(database_path: &str) -> Result<Self> {
        let pool = database::create_pool(database_path)?;
        Self::with_schema(pool)
    }

    pub fn in_memory() -> Result<Self> {
        let pool = database::create_memory_pool()?;
        Self::with_schema(pool)
    }

    fn with_schema(pool: DbPool) -> Result<Self> {
        let store = Self::new(pool);
        let mut conn = store.connection()?;
        database::setup::ensure_schema(&mut conn)?;
        drop(conn);
        Ok(store)
    }

    /// Drop and recreate every table
    pub fn reset_schema(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}

impl TournamentStore for SqliteStore {
    fn list_players(&self) -> Result<Vec<Player>> {
        let mut conn = self.connection()?;
        let rows = database::players::list_all(&mut conn)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    fn list_matches(&self) -> Result<Vec<MatchRecord>> {
        let mut conn = self.connection()?;
        let rows = database::matches::list_all(&mut conn)?;
        Ok(rows.into_iter().map(MatchRecord::from).collect())
    }

    fn register_player(&self, name: &str) -> Result<Player> {
        let mut conn = self.connection()?;
        let row = database::players::insert_player(&mut conn, name)?;
        Ok(row.into())
    }

    fn record_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        is_draw: bool,
    ) -> Result<MatchRecord> {
        let mut conn = self.connection()?;
        let row = database::matches::insert_match(&mut conn, winner_id, loser_id, is_draw)?;
        Ok(row.into())
    }

    fn reset_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::matches::delete_all(&mut conn)
    }

    fn reset_players(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::players::delete_all(&mut conn)
    }

    fn count_players(&self) -> Result<usize> {
        let mut conn = self.connection()?;
        database::players::count_all(&mut conn)
    }

    fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let mut conn = self.connection()?;
        let row = database::players::find_by_id(&mut conn, player_id)?;
        Ok(row.map(Player::from))
    }
}
