use crate::models::log_row::LogRow;

/// Write the fetched log rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[LogRow]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| std::io::Error::other(format!("serialize log rows: {e}")))?;
    std::fs::write(path, json)
}
