use serde::{Deserialize, Serialize};

/// Inbound log row: read-only projection of the spreadsheet data, re-fetched
/// in full on every load. The endpoint uses PascalCase column names and may
/// omit any field, so everything is optional here. Serializes back with the
/// same column names for JSON export.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "StartTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Duration", default)]
    pub duration: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

impl LogRow {
    fn cell(field: &Option<String>) -> String {
        match field {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => "N/A".to_string(),
        }
    }

    /// Table cells in display order. Missing fields render as "N/A",
    /// except notes which stay blank.
    pub fn cells(&self) -> Vec<String> {
        vec![
            Self::cell(&self.date),
            Self::cell(&self.start_time),
            Self::cell(&self.end_time),
            Self::cell(&self.location),
            Self::cell(&self.duration),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}
