//! Unified application error type.
//! The store, the SQLite backend and the CLI all return AppError so the
//! caller sees one consistent error surface.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Record store
    // ---------------------------
    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("Visitor {0} is already checked out")]
    AlreadyCheckedOut(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid record: {0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid visitor type: {0} (expected delivery, relative or guest)")]
    InvalidVisitorType(String),

    #[error("Invalid family member '{0}' (expected NAME:AGE:RELATION)")]
    InvalidMember(String),

    // ---------------------------
    // IO / database / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

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
}

impl AppError {
    pub fn resident_not_found(id: &str) -> Self {
        AppError::NotFound {
            collection: "Resident",
            id: id.to_string(),
        }
    }

    pub fn visitor_not_found(id: &str) -> Self {
        AppError::NotFound {
            collection: "Visitor",
            id: id.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
