use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a migration version is already marked as applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Mark a migration version as applied in the `log` table.
fn mark_applied(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        rusqlite::params![
            chrono::Local::now().to_rfc3339(),
            version,
            format!("Migration applied: {version}"),
        ],
    )?;
    Ok(())
}

/// Add an index on log(date) for faster ordered reads.
fn migrate_add_log_date_index(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_date ON log(date);")?;
    Ok(())
}

/// Run all pending migrations, in order. Each one is idempotent and recorded
/// in the `log` table so it never runs twice.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let migrations: [(&str, fn(&Connection) -> Result<()>); 1] =
        [("20250705_0002_add_log_date_index", migrate_add_log_date_index)];

    for (version, migration) in migrations {
        if migration_applied(conn, version)? {
            continue;
        }
        migration(conn)?;
        mark_applied(conn, version)?;
    }

    Ok(())
}
