use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = include_str!("drop.sql");

/// Drop every table and view, then recreate the schema
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    run_script(conn, DROP_SQL).context("Failed to drop existing schema")?;
    run_script(conn, SCHEMA_SQL)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

/// Create any missing tables and views, keeping existing data
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    run_script(conn, SCHEMA_SQL)?;

    log::debug!("Database schema ensured");
    Ok(())
}

fn run_script(conn: &mut DbConn, script: &str) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_blank_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n ;DROP TABLE b;  \n");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "DROP TABLE b"]);
    }

    #[test]
    fn test_bundled_scripts_split_cleanly() {
        let schema = split_sql_statements(SCHEMA_SQL);
        assert_eq!(schema.len(), 5);
        assert!(schema.last().unwrap().starts_with("CREATE VIEW IF NOT EXISTS standings"));

        let drop = split_sql_statements(DROP_SQL);
        assert_eq!(drop.len(), 3);
        assert!(drop.iter().all(|s| s.starts_with("DROP")));
    }
}
