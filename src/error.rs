//! Error types for the Parafiscal Savings Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur at the roster entry boundary
//! and while loading rate configuration. The calculation core itself never
//! fails once given validated input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validation failure for a single spreadsheet row during bulk import.
///
/// Row indices are 1-based positions within the imported data rows
/// (the header row is stripped by the spreadsheet parser before the
/// rows reach the engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// The 1-based index of the offending row.
    pub row: usize,
    /// A human-readable description of what made the row invalid.
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// The main error type for the Parafiscal Savings Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tikin_engine::error::EngineError;
///
/// let error = EngineError::InvalidSalary {
///     message: "salary cannot be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid salary: salary cannot be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary was non-numeric, non-positive, or below the legal minimum.
    #[error("Invalid salary: {message}")]
    InvalidSalary {
        /// A description of what made the salary invalid.
        message: String,
    },

    /// A bulk-add quantity was less than one.
    #[error("Invalid employee count: {count} (must be at least 1)")]
    InvalidCount {
        /// The rejected quantity.
        count: u32,
    },

    /// An employee with the given ID was not found in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        id: String,
    },

    /// A bulk import contained one or more invalid rows.
    ///
    /// Imports are all-or-nothing: a single bad row fails the whole import
    /// and the error carries the complete row-indexed list.
    #[error("Import failed: {} invalid row(s)", errors.len())]
    ImportError {
        /// The complete list of row-level validation failures.
        errors: Vec<RowError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or was internally inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
