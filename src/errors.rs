//! Unified application error type.
//! All modules (ledger, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Validation findings (bad day type, missing day, overlap, ...) are NOT
//! errors: they travel as plain strings out of `Record::validate`.

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
    // CSV-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration format: {0}")]
    InvalidDelta(String),

    #[error("Invalid day type code: {0}")]
    InvalidDayType(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Ledger error: {0}")]
    Ledger(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Language not available: {0}")]
    UnknownLanguage(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
