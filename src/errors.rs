//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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
    // Table parsing
    // ---------------------------
    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("Unknown key '{key}'. Valid keys are: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("No activity table selected. Pass --file or save once to remember one")]
    NoTableFile,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Spreadsheet is open in another program, please close it: {0}")]
    ExportLocked(String),
}

pub type AppResult<T> = Result<T, AppError>;
