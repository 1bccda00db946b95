use super::location::Location;
use serde::{Deserialize, Serialize};

/// The one in-progress work session. Mirrored on disk by the session file so
/// it survives a restart; at most one instance is alive at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSession {
    pub date: String,       // "YYYY-MM-DD"
    pub start_time: String, // "HH:MM"
    pub location: Location,
}

impl WorkSession {
    pub fn new(date: String, start_time: String, location: Location) -> Self {
        Self {
            date,
            start_time,
            location,
        }
    }

    /// Status line shown by `status` and after `start`.
    pub fn status_line(&self) -> String {
        format!(
            "Working at {} since {} on {}.",
            self.location, self.start_time, self.date
        )
    }
}
