use anyhow::{Context, Result};
use log::info;

use super::connection::DbConn;

/// Drop and recreate all tables
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    info!("Database schema reset successfully");
    Ok(())
}

/// Create the schema unless the tables are already there
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    if schema_exists(conn)? {
        return Ok(());
    }

    reset_database(conn)
}

fn schema_exists(conn: &mut DbConn) -> Result<bool> {
    let sql = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('players', 'matches')";

    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context("Failed to inspect database schema")?;

    Ok(count == 2)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
