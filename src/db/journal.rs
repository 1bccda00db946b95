use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the operational journal.
#[derive(Debug)]
pub struct JournalEntry {
    pub id: i32,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write a journal line into the `log` table.
pub fn jlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Best-effort journal write: the journal must never fail the command that is
/// being recorded, so open/insert errors are swallowed here.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Ok(pool) = DbPool::new(&cfg.database) {
        let _ = jlog(&pool.conn, operation, target, message);
    }
}

/// Load the full journal, oldest first.
pub fn load_entries(pool: &mut DbPool) -> AppResult<Vec<JournalEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(JournalEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
