//! Manual-entry validation: raw CLI fields in, a ready-to-send LogEntry out.
//! Independent of the active-session lifecycle.

use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::location::Location;
use crate::utils::{date, time};

/// Raw manual-entry fields, exactly as collected from the command line.
/// Empty strings count as absent.
#[derive(Debug, Default, Clone)]
pub struct ManualEntryInput {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ManualEntryInput {
    /// Validate every field and build the outbound entry.
    ///
    /// Date, start time and location are mandatory. The date must be a real
    /// calendar date in "YYYY-MM-DD"; times must be strict 24-hour "HH:MM"
    /// ("9:30" is rejected, "23:59" is fine). End time and notes are optional.
    pub fn validate(&self) -> AppResult<LogEntry> {
        let date = non_empty(&self.date)
            .ok_or_else(|| AppError::MissingField("date".to_string()))?;
        if !date::is_valid_date(date) {
            return Err(AppError::InvalidDate(format!(
                "'{date}'. Please use YYYY-MM-DD"
            )));
        }

        let start = non_empty(&self.start_time)
            .ok_or_else(|| AppError::MissingField("start time".to_string()))?;
        if !time::is_valid_time(start) {
            return Err(AppError::InvalidTime(format!(
                "'{start}'. Please use HH:MM"
            )));
        }

        let end = match non_empty(&self.end_time) {
            Some(end) if !time::is_valid_time(end) => {
                return Err(AppError::InvalidTime(format!(
                    "'{end}'. Please use HH:MM or leave blank"
                )));
            }
            other => other.map(str::to_string),
        };

        let loc_code = non_empty(&self.location)
            .ok_or_else(|| AppError::MissingField("location".to_string()))?;
        let location = Location::from_code(loc_code).ok_or_else(|| {
            AppError::InvalidLocation(format!(
                "'{loc_code}'. Use 'home' (H) or 'office' (O)"
            ))
        })?;

        Ok(LogEntry {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end,
            location,
            notes: non_empty(&self.notes).map(str::to_string),
        })
    }
}
