//! Blocking HTTP client for the spreadsheet-backed endpoint. One exchange per
//! operation, no retry: a failed write is reported and left to the user.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::log_row::LogRow;
use crate::remote::protocol::{LogResponse, SaveAck, cache_bust};
use reqwest::blocking::Response;
use std::time::Duration;

const PLACEHOLDER_MARKER: &str = "YOUR_DEPLOYMENT_ID";

pub struct RemoteClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        if cfg.endpoint_url.trim().is_empty() || cfg.endpoint_url.contains(PLACEHOLDER_MARKER) {
            return Err(AppError::Config(format!(
                "endpoint URL is not configured. Set 'endpoint_url' in {}",
                Config::config_file().display()
            )));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: cfg.endpoint_url.clone(),
            http,
        })
    }

    /// Diagnostic for a non-2xx response: status plus a snippet of the body.
    fn http_error(resp: Response) -> AppError {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        let snippet: String = body.chars().take(500).collect();

        if snippet.is_empty() {
            AppError::Remote(format!("HTTP error! Status: {status}"))
        } else {
            AppError::Remote(format!("HTTP error! Status: {status} - Body: {snippet}"))
        }
    }

    /// Submit one entry. Returns the server message on success.
    pub fn submit(&self, entry: &LogEntry) -> AppResult<String> {
        let resp = self.http.post(&self.endpoint).json(entry).send()?;

        if !resp.status().is_success() {
            return Err(Self::http_error(resp));
        }

        let ack: SaveAck = resp.json()?;
        if ack.success {
            Ok(ack
                .message
                .unwrap_or_else(|| "Data saved successfully!".to_string()))
        } else {
            Err(AppError::Remote(ack.error.unwrap_or_else(|| {
                "Unknown error from endpoint".to_string()
            })))
        }
    }

    /// Fetch the full log. Every call re-reads everything; the cacheBust
    /// parameter defeats intermediate GET caching.
    pub fn fetch_log(&self) -> AppResult<Vec<LogRow>> {
        let url = format!(
            "{}?action=getLog&cacheBust={}",
            self.endpoint,
            cache_bust()
        );

        let resp = self.http.get(&url).send()?;

        if !resp.status().is_success() {
            return Err(Self::http_error(resp));
        }

        let parsed: LogResponse = resp.json()?;
        match (parsed.success, parsed.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(AppError::Remote(parsed.error.unwrap_or_else(|| {
                "Unknown error from endpoint or data missing".to_string()
            }))),
        }
    }
}
