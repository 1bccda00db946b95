use crate::config::Config;
use crate::core::session::SessionState;
use crate::errors::AppResult;
use crate::store::SessionFile;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Print the current session status.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let file = SessionFile::new(expand_tilde(&cfg.session_file));
    let state = SessionState::from_stored(file.load());

    info(format!("Status: {}", state.status_line()));

    Ok(())
}
