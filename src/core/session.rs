//! Session lifecycle decision layer. Transitions are pure: the current state
//! comes in, the next state comes out, and all I/O (session file, endpoint,
//! journal) stays with the callers.

use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::location::Location;
use crate::models::session::WorkSession;

/// The two-state lifecycle: Idle (no session) or Active (exactly one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    active: Option<WorkSession>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self { active: None }
    }

    pub fn from_stored(stored: Option<WorkSession>) -> Self {
        Self { active: stored }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&WorkSession> {
        self.active.as_ref()
    }

    /// Status line shown by `status` and after transitions.
    pub fn status_line(&self) -> String {
        match &self.active {
            Some(session) => session.status_line(),
            None => "Not working.".to_string(),
        }
    }

    /// Idle → Active. Refused when a session is already running; rejection
    /// leaves the current state untouched.
    pub fn start(
        &self,
        location: Location,
        date: String,
        start_time: String,
    ) -> AppResult<(SessionState, WorkSession)> {
        if let Some(current) = &self.active {
            return Err(AppError::AlreadyWorking(
                current.location.to_string(),
                current.start_time.clone(),
            ));
        }

        let session = WorkSession::new(date, start_time, location);
        Ok((
            SessionState {
                active: Some(session.clone()),
            },
            session,
        ))
    }

    /// Active → (entry to sync). The state itself only moves to Idle once the
    /// caller has synced the entry successfully; a failed sync keeps the
    /// current state so the user may retry.
    pub fn stop(&self, end_time: String) -> AppResult<LogEntry> {
        match &self.active {
            Some(session) => Ok(LogEntry::from_session(session, end_time)),
            None => Err(AppError::NotWorking),
        }
    }

    /// Complete a successful stop: Active → Idle.
    pub fn cleared(&self) -> SessionState {
        SessionState { active: None }
    }
}
