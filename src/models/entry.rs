use super::location::Location;
use super::session::WorkSession;
use serde::Serialize;

/// Outbound log entry: the JSON body of a write request. Built either from a
/// completed session (quick-stop) or from validated manual fields. Sent once,
/// never retried, never stored locally after the send.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub date: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LogEntry {
    /// Quick-stop entry: closes the given session at `end_time` with an
    /// auto-generated note referencing the start time.
    pub fn from_session(session: &WorkSession, end_time: String) -> Self {
        let notes = format!("Quick stop for session started at {}", session.start_time);
        Self {
            date: session.date.clone(),
            start_time: session.start_time.clone(),
            end_time: Some(end_time),
            location: session.location,
            notes: Some(notes),
        }
    }
}
