//! Unified application error type.
//! All modules (core, remote, db, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Journal database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Remote endpoint
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint error: {0}")]
    Remote(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid location code: {0}")]
    InvalidLocation(String),

    #[error("Missing mandatory field: {0}")]
    MissingField(String),

    // ---------------------------
    // Session lifecycle errors
    // ---------------------------
    #[error("You are already working at {0} since {1}")]
    AlreadyWorking(String, String),

    #[error("You are not currently working")]
    NotWorking,

    #[error("Session state error: {0}")]
    Session(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
