use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::models::log_row::LogRow;
use std::path::Path;

/// High-level business logic for the `export` command: the caller fetches the
/// rows, this writes them in the requested format.
pub struct ExportLogic;

impl ExportLogic {
    pub fn run(rows: &[LogRow], format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, rows)?,
            ExportFormat::Json => json::write_json(file, rows)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
