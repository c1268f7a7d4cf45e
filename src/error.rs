//! Error types for the wage estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that malformed schedule *lines* are never errors: the parser skips
//! them silently. Only caller-level conditions (empty input, empty parse
//! result, an invalid shift record reaching the calculator) are surfaced
//! through these types.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the wage estimation engine.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid rates.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record was invalid (e.g., end time not after start time).
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The date of the invalid shift.
        date: NaiveDate,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// No valid shift line was found in the pasted schedule text.
    #[error("No valid shift data found in input")]
    NoShiftData,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
