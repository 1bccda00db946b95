use crate::cli::commands::list::render_log;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::ManualEntryInput;
use crate::db::journal;
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::ui::messages::success;

/// Add a manual log entry, independent of the active session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        location,
        notes,
    } = cmd
    {
        //
        // 1. Validate fields and build the outbound entry
        //
        let input = ManualEntryInput {
            date: Some(date.clone()),
            start_time: start.clone(),
            end_time: end.clone(),
            location: location.clone(),
            notes: notes.clone(),
        };
        let entry = input.validate()?;

        //
        // 2. Submit (single exchange, no retry)
        //
        let client = RemoteClient::new(cfg)?;
        let message = match client.submit(&entry) {
            Ok(message) => message,
            Err(e) => {
                journal::record(
                    cfg,
                    "add",
                    entry.location.as_str(),
                    &format!("Manual entry sync failed: {e}"),
                );
                return Err(e);
            }
        };

        journal::record(
            cfg,
            "add",
            entry.location.as_str(),
            &format!("Manual entry saved for {}", entry.date),
        );

        success(message);

        //
        // 3. Reload the remote log so the new entry is visible
        //
        render_log(cfg);
    }

    Ok(())
}
