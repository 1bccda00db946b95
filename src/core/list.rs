//! Log table construction. Pure: rows (or an error) in, a renderable table
//! out, so the rendering decisions are testable without any network.

use crate::models::log_row::LogRow;
use crate::utils::table::Table;

pub const LOG_HEADERS: [&str; 6] = ["Date", "Start", "End", "Location", "Duration", "Notes"];

/// Build the log table for a successful fetch. An empty result gets exactly
/// one placeholder row instead of an empty body.
pub fn log_table(rows: &[LogRow]) -> Table {
    let mut table = Table::new(&LOG_HEADERS);

    if rows.is_empty() {
        table.add_span_row("No entries found.".to_string());
        return table;
    }

    for row in rows {
        table.add_row(row.cells());
    }

    table
}

/// Build the single-row table shown when the log could not be fetched.
pub fn error_table(diagnostic: &str) -> Table {
    let mut table = Table::new(&LOG_HEADERS);
    table.add_span_row(format!("Error loading data: {diagnostic}"));
    table
}
