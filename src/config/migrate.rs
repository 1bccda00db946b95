//! Config file upkeep: detect and repair missing fields in the YAML file.
//! Fields added in newer releases (e.g. `http_timeout_secs`) are filled in
//! with their defaults without touching the values the user already set.

use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Fields every config file must carry, with their default YAML values.
fn required_fields() -> Vec<(&'static str, Value)> {
    let defaults = super::Config::default();
    vec![
        ("endpoint_url", Value::String(defaults.endpoint_url)),
        ("database", Value::String(defaults.database)),
        ("session_file", Value::String(defaults.session_file)),
        (
            "http_timeout_secs",
            Value::Number(defaults.http_timeout_secs.into()),
        ),
    ]
}

/// Return the names of required fields missing from the given config file.
/// A missing or unparsable file reports every field as missing.
pub fn missing_fields(conf_file: &Path) -> io::Result<Vec<String>> {
    let keys: Vec<String> = match fs::read_to_string(conf_file) {
        Ok(content) => match serde_yaml::from_str::<Value>(&content) {
            Ok(yaml) => required_fields()
                .iter()
                .filter(|(name, _)| {
                    yaml.as_mapping()
                        .map(|m| !m.contains_key(Value::String(name.to_string())))
                        .unwrap_or(true)
                })
                .map(|(name, _)| name.to_string())
                .collect(),
            Err(_) => required_fields()
                .iter()
                .map(|(name, _)| name.to_string())
                .collect(),
        },
        Err(_) => required_fields()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect(),
    };
    Ok(keys)
}

/// Insert defaults for any missing field, preserving existing values.
/// Returns true when the file was rewritten.
pub fn apply_defaults(conf_file: &Path) -> io::Result<bool> {
    let content = fs::read_to_string(conf_file)?;

    let mut yaml = serde_yaml::from_str::<Value>(&content)
        .map_err(|e| io::Error::other(format!("parse config {:?}: {}", conf_file, e)))?;

    let map = match yaml.as_mapping_mut() {
        Some(m) => m,
        None => return Err(io::Error::other("config file is not a YAML mapping")),
    };

    let mut added: Vec<&str> = Vec::new();

    for (name, default) in required_fields() {
        let key = Value::String(name.to_string());
        if !map.contains_key(&key) {
            map.insert(key, default);
            added.push(name);
        }
    }

    if added.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let serialized = serde_yaml::to_string(&yaml)
        .map_err(|e| io::Error::other(format!("serialize config: {}", e)))?;
    fs::write(conf_file, serialized)?;

    success(format!(
        "Configuration updated: added missing field(s) {}.",
        added.join(", ")
    ));

    Ok(true)
}
