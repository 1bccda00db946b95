use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

fn default_timeout() -> u64 {
    30
}

fn default_endpoint() -> String {
    // Deployment URL of the Apps Script web app backing the spreadsheet.
    "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Web endpoint receiving entries (POST) and serving the log (GET).
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    /// SQLite journal database.
    pub database: String,
    /// JSON file holding the active work session, if any.
    pub session_file: String,
    #[serde(default = "default_timeout")]
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint(),
            database: Self::database_file().to_string_lossy().to_string(),
            session_file: Self::session_file_path().to_string_lossy().to_string(),
            http_timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worktrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktrack.conf")
    }

    /// Return the full path of the SQLite journal database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktrack.sqlite")
    }

    /// Return the full path of the persisted session file
    pub fn session_file_path() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparsable file also falls back to defaults.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let parsed = fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok());
            match parsed {
                Some(cfg) => cfg,
                None => {
                    crate::ui::messages::warning(format!(
                        "Configuration file '{}' is not readable, using defaults.",
                        path.display()
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and journal database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
