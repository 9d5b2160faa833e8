pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod standings;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
