//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing the roster.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::EmployeeNotFound { id: 7 };
/// assert_eq!(error.to_string(), "Employee not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An id-keyed operation was given an id absent from the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: u32,
    },

    /// A ratio formula was given a zero divisor.
    ///
    /// Zero divisors are rejected up front rather than propagated as a
    /// non-finite value: `Decimal` has no infinity to propagate.
    #[error("Division by zero: {field} is zero")]
    DivisionByZero {
        /// The field that was zero.
        field: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
