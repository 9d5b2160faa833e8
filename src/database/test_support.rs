use tempfile::TempDir;

use super::connection::{create_pool, get_connection, DbConn, DbPool};
use super::setup::initialize_schema;
use crate::config::settings::DatabaseSettings;

/// A pool over a fresh database file. Keep the `TempDir` alive for the test.
pub fn temp_pool() -> (TempDir, DbPool) {
    let temp = TempDir::new().unwrap();
    let settings = DatabaseSettings {
        path: temp.path().join("tournament.db").to_string_lossy().into_owned(),
        ..DatabaseSettings::default()
    };
    let pool = create_pool(&settings).unwrap();
    initialize_schema(&mut get_connection(&pool).unwrap()).unwrap();
    (temp, pool)
}

pub fn conn(pool: &DbPool) -> DbConn {
    get_connection(pool).unwrap()
}
