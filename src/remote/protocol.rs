//! Wire types of the script endpoint. The endpoint always answers 200-range
//! JSON when it is reachable and healthy; application failures come back as
//! `success: false` with an `error` text.

use crate::models::log_row::LogRow;
use serde::Deserialize;

/// Acknowledgment of a write (POST). A response missing `success` counts as
/// a failure.
#[derive(Debug, Deserialize)]
pub struct SaveAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of a log read (GET).
#[derive(Debug, Deserialize)]
pub struct LogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<LogRow>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Per-call value for the cache-defeating query parameter.
pub fn cache_bust() -> i64 {
    chrono::Local::now().timestamp_millis()
}
