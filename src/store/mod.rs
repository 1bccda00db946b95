//! Persisted session state: one JSON file holding the serialized active
//! WorkSession, or absent when none is active. Corrupted content is discarded
//! and treated as "no active session".

use crate::errors::AppResult;
use crate::models::session::WorkSession;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted session, if any. A file that cannot be parsed is
    /// removed so the next load starts fresh.
    pub fn load(&self) -> Option<WorkSession> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return None,
        };

        match serde_json::from_str::<WorkSession>(&content) {
            Ok(session) => Some(session),
            Err(_) => {
                warning(
                    "Could not restore previous session (stored state was corrupted). \
                     Starting fresh.",
                );
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    pub fn save(&self, session: &WorkSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(session)
            .map_err(|e| crate::errors::AppError::Session(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the persisted session. Missing file is fine.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
