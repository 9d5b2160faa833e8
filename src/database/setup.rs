use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

const DROP_SQL: &str = "
    DROP VIEW IF EXISTS playerStandings;
    DROP TABLE IF EXISTS matches;
    DROP TABLE IF EXISTS players;
";

/// Create tables and the standings view if they are missing.
pub fn initialize_schema(conn: &mut DbConn) -> Result<()> {
    execute_script(conn, SCHEMA_SQL)?;
    log::debug!("Database schema initialized");
    Ok(())
}

/// Drop everything and recreate the schema from scratch.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    execute_script(conn, DROP_SQL).context("Failed to drop existing schema")?;
    execute_script(conn, SCHEMA_SQL)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn execute_script(conn: &mut DbConn, script: &str) -> Result<()> {
    let statements = split_sql_statements(script);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
