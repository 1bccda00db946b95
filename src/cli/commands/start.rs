use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionState;
use crate::db::journal;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::store::SessionFile;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::{date, time};

/// Start a new work session, refusing when one is already active.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { location } = cmd {
        let location = Location::from_code(location).ok_or_else(|| {
            AppError::InvalidLocation(format!(
                "'{location}'. Use 'home' (H) or 'office' (O)"
            ))
        })?;

        let file = SessionFile::new(expand_tilde(&cfg.session_file));
        let state = SessionState::from_stored(file.load());

        let (next, session) = state.start(location, date::today_string(), time::now_hhmm())?;

        file.save(&session)?;

        journal::record(
            cfg,
            "start",
            session.location.as_str(),
            &format!("Work started at {} at {}", session.location, session.start_time),
        );

        success(format!(
            "Work started at {} at {}",
            session.location, session.start_time
        ));
        info(format!("Status: {}", next.status_line()));
    }

    Ok(())
}
