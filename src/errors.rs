//! Error types for grantlift.
//!
//! The projection engine itself never fails: every error here originates at a
//! boundary (reading a config file, parsing arguments, validating inputs before
//! they reach the engine).
//!
//! # Example
//!
//! ```rust
//! use grantlift::errors::{GrantliftError, ValidationError};
//!
//! let error = ValidationError::for_field("avg_cpc", "must be greater than zero")
//!     .with_context("> 0", "0");
//! assert_eq!(
//!     error.to_string(),
//!     "avg_cpc: must be greater than zero (expected: > 0, got: 0)"
//! );
//!
//! let err = GrantliftError::Validation(vec![error]);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for grantlift operations.
#[derive(Debug, Error)]
pub enum GrantliftError {
    /// File system errors while reading config or writing output.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// One or more inputs are out of their documented range.
    #[error("{} invalid input value(s):\n{}", .0.len(), render_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Command-line argument errors not caught by clap.
    #[error("Invalid argument '{arg}': {message}")]
    Cli { arg: String, message: String },
}

impl GrantliftError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn cli(arg: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Cli {
            arg: arg.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this by changing inputs or config.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }

    /// Field-level violations, empty for non-validation errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn render_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single out-of-range input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Input field name, as it appears in the config file.
    pub field: String,
    /// Human-readable error message.
    pub message: String,
    /// Expected value or constraint.
    pub expected: Option<String>,
    /// Actual value that failed validation.
    pub actual: Option<String>,
}

impl ValidationError {
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Add expected and actual context to the error.
    pub fn with_context(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;

        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => write!(f, " (expected: {expected}, got: {actual})"),
            (Some(expected), None) => write!(f, " (expected: {expected})"),
            (None, Some(actual)) => write!(f, " (got: {actual})"),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, GrantliftError>;
