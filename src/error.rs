//! Error types for the country registry
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Unified error type for registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while a prompt was waiting
    #[error("Input stream closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file '{}' does not exist", .0.display())]
    DataFileMissing(PathBuf),

    #[error("Invalid header: expected 'name,population,area,continent', found '{found}'")]
    InvalidHeader { found: String },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Country '{0}' already exists")]
    DuplicateName(String),

    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Country '{0}' not found")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: u64, max: u64 },
}
