use crate::cli::commands::list::render_log;
use crate::config::Config;
use crate::core::session::SessionState;
use crate::db::journal;
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::store::SessionFile;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::time;

/// Stop the active session: build the quick-stop entry, sync it, and only
/// then clear the persisted state. A failed sync leaves the session intact so
/// the user may retry.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let file = SessionFile::new(expand_tilde(&cfg.session_file));
    let state = SessionState::from_stored(file.load());

    let end_time = time::now_hhmm();
    let entry = state.stop(end_time.clone())?;

    let client = RemoteClient::new(cfg)?;
    let message = match client.submit(&entry) {
        Ok(message) => message,
        Err(e) => {
            journal::record(
                cfg,
                "stop",
                entry.location.as_str(),
                &format!("Sync failed, session kept: {e}"),
            );
            return Err(e);
        }
    };

    file.clear()?;

    journal::record(
        cfg,
        "stop",
        entry.location.as_str(),
        &format!("Work stopped at {end_time}"),
    );

    success(message);
    success(format!("Work stopped at {end_time}. Entry logged."));
    info(format!("Status: {}", state.cleared().status_line()));

    render_log(cfg);

    Ok(())
}
