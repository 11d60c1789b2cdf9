//! Unified application error type.
//! All modules (db, core, cli, session) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Malformed record in '{collection}': {reason}")]
    MalformedRecord { collection: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    // ---------------------------
    // Validation / session errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not logged in. Run `punchlog login` first")]
    NotLoggedIn,

    #[error("This command requires an admin session")]
    AdminRequired,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Session file errors
    // ---------------------------
    #[error("Session error: {0}")]
    Session(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
