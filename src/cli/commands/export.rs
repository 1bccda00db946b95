use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::remote::RemoteClient;

/// Export the remote log to a local file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let client = RemoteClient::new(cfg)?;
        let rows = client.fetch_log()?;

        ExportLogic::run(&rows, format, file, *force)?;

        journal::record(
            cfg,
            "export",
            format.as_str(),
            &format!("Exported {} entries to {}", rows.len(), file),
        );
    }

    Ok(())
}
