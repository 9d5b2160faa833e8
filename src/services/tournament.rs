use anyhow::Result;
use log::{debug, info};

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, DbPool, Match, Player};
use crate::swiss::{self, Pairing, PlayerId, Standing};

/// Library entry point for running a Swiss tournament.
///
/// Every call checks out its own connection and hands it back on return,
/// whether or not the call succeeded. Nothing is cached between calls.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    /// Open the configured database, creating the schema if needed.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database)?;
        let service = Self { pool };
        database::setup::initialize_schema(&mut service.connection()?)?;

        info!("Using tournament database at {}", config.database.path);
        Ok(service)
    }

    /// Drop all tables and start over with an empty schema.
    pub fn reset(&self) -> Result<()> {
        database::setup::reset_database(&mut self.connection()?)
    }

    pub fn delete_matches(&self) -> Result<usize> {
        let removed = database::matches::delete_all(&mut self.connection()?)?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    /// Remove every player along with the matches they played.
    pub fn delete_players(&self) -> Result<usize> {
        let removed = database::players::delete_all(&mut self.connection()?)?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    pub fn count_players(&self) -> Result<i64> {
        database::players::count(&mut self.connection()?)
    }

    /// Add a player. Names are free text and need not be unique.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = database::players::insert_player(&mut self.connection()?, name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        database::players::list_all(&mut self.connection()?)
    }

    /// Players ranked by wins, most first. Includes players yet to play.
    pub fn player_standings(&self) -> Result<Vec<Standing>> {
        let standings = database::standings::list_standings(&mut self.connection()?)?;
        debug!("Computed standings for {} players", standings.len());
        Ok(standings)
    }

    /// Record the outcome of a single match.
    ///
    /// Unknown player ids and a player beating themselves are rejected by the
    /// storage constraints and returned as errors.
    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
        let recorded = database::matches::insert_match(&mut self.connection()?, winner_id, loser_id)?;
        info!("Reported match {}: {} beat {}", recorded.id, winner_id, loser_id);
        Ok(recorded)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        database::matches::list_all(&mut self.connection()?)
    }

    /// Pairings for the next round, built from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.player_standings()?;
        let pairings = swiss::swiss_pairings(&standings)?;
        debug!("Paired {} players into {} matches", standings.len(), pairings.len());
        Ok(pairings)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}
