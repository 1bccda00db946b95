use crate::config::Config;
use crate::db::journal;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (with a placeholder endpoint URL)
///  - the SQLite journal database and its pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing worktrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", db_path.display());

    // journal write is non-blocking for the command
    if let Err(e) = journal::jlog(
        &conn,
        "init",
        "",
        &format!("Journal database initialized at {}", db_path.display()),
    ) {
        eprintln!("⚠️ Failed to write journal entry: {}", e);
    }

    if !cli.test {
        println!("👉 Set 'endpoint_url' in the config file before syncing entries.");
    }
    println!("🎉 worktrack initialization completed!");
    Ok(())
}
