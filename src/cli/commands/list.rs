use crate::config::Config;
use crate::core::list::{error_table, log_table};
use crate::db::journal;
use crate::errors::AppResult;
use crate::remote::RemoteClient;

/// Fetch the remote log and print it. Fetch failures become an error row
/// instead of a failed process, so the table surface is always consistent.
pub fn render_log(cfg: &Config) {
    let table = match RemoteClient::new(cfg).and_then(|client| client.fetch_log()) {
        Ok(rows) => log_table(&rows),
        Err(e) => error_table(&e.to_string()),
    };

    print!("{}", table.render());
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    render_log(cfg);
    journal::record(cfg, "list", "", "Log fetched from endpoint");
    Ok(())
}
