//! Core error types for the lakbay admin platform.
//!
//! This module provides the [`Error`] enum covering schema definition
//! problems, blocked submissions, persistence errors, and configuration
//! errors, plus [`ValidationFailure`] for callers that need a whole form's
//! field errors as a single value.
//!
//! Field-level validation problems are deliberately *not* errors: they are
//! message strings stored per field by the form session and surfaced next to
//! the offending input. Only boundary-crossing failures use this enum.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A whole-form validation failure with per-field messages.
///
/// Produced when a caller asks for a submission payload while one or more
/// fields still hold an error. The per-field map is ordered so error output
/// is stable.
///
/// # Examples
///
/// ```
/// use lakbay_core::error::ValidationFailure;
///
/// let mut failure = ValidationFailure::new("Submission blocked.");
/// failure.add_field("business_name", "This field is required.");
/// assert_eq!(failure.field_errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationFailure {
    /// The primary error message.
    pub message: String,
    /// Per-field error messages, keyed by field name.
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationFailure {
    /// Creates a new `ValidationFailure` with a top-level message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    /// Adds a field-level error message.
    pub fn add_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors.insert(field.into(), message.into());
    }

    /// Returns `true` if no field-level errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        let mut first = true;
        for (field, message) in &self.field_errors {
            if first {
                write!(f, " (")?;
            } else {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        if !first {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// The primary error type for the lakbay platform.
///
/// Covers programming-time invariants (unknown field names, malformed schema
/// definitions, out-of-sequence submissions), persistence errors, and
/// configuration errors.
#[derive(Error, Debug)]
pub enum Error {
    // ── Form schema invariants ───────────────────────────────────────

    /// A field name not present in the schema registry was referenced.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A schema definition violates the step partition invariant.
    #[error("Invalid schema: {0}")]
    Schema(String),

    /// A submission was attempted while the form still holds errors or
    /// while navigation is locked.
    #[error("Submission blocked: {0}")]
    SubmissionBlocked(ValidationFailure),

    // ── Persistence ──────────────────────────────────────────────────

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An invalid registration-status transition was requested.
    #[error("Invalid status transition: {0}")]
    Status(String),

    /// A storage-level failure reported by a persistence backend.
    #[error("Store error: {0}")]
    Store(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_display_simple() {
        let failure = ValidationFailure::new("Submission blocked.");
        assert_eq!(failure.to_string(), "Submission blocked.");
    }

    #[test]
    fn test_validation_failure_display_field_errors() {
        let mut failure = ValidationFailure::new("Submission blocked.");
        failure.add_field("email", "Enter a valid email address.");
        failure.add_field("business_name", "This field is required.");
        let rendered = failure.to_string();
        assert!(rendered.contains("email: Enter a valid email address."));
        assert!(rendered.contains("business_name: This field is required."));
        // BTreeMap ordering puts business_name first.
        assert!(rendered.find("business_name").unwrap() < rendered.find("email").unwrap());
    }

    #[test]
    fn test_validation_failure_is_empty() {
        let mut failure = ValidationFailure::new("x");
        assert!(failure.is_empty());
        failure.add_field("a", "b");
        assert!(!failure.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownField("bogus".into());
        assert_eq!(err.to_string(), "Unknown field: bogus");
        let err = Error::NotFound("listing 42".into());
        assert_eq!(err.to_string(), "Not found: listing 42");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}
