//! Core error types for eventmgt-rs.
//!
//! [`EventMgtError`] covers the few failure categories this workspace has:
//! row mapping, validation of submitted registration data, configuration
//! loading (parse errors and unreadable files), and serialization. The domain
//! transforms themselves (option parsing, value-type lookup, partial names)
//! never fail.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Represents a validation error with optional field-level errors.
///
/// Validation errors can be either simple (a single message) or compound
/// (containing per-field error lists keyed by field name).
///
/// # Examples
///
/// ```
/// use eventmgt_core::error::ValidationError;
///
/// // Simple validation error
/// let err = ValidationError::new("This field is required.", "required");
///
/// // Field-level validation errors
/// let mut field_errors = std::collections::HashMap::new();
/// field_errors.insert(
///     "field_3".to_string(),
///     vec![ValidationError::new("This field is required.", "required")],
/// );
/// let err = ValidationError::with_field_errors(field_errors);
/// assert!(err.has_field_error("field_3"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "required").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
    /// Per-field validation errors, keyed by field name.
    pub field_errors: HashMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
            field_errors: HashMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-field errors.
    pub fn with_field_errors(field_errors: HashMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            params: HashMap::new(),
            field_errors,
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if at least one error is recorded for `field`.
    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors
            .get(field)
            .is_some_and(|errors| !errors.is_empty())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.field_errors.is_empty() {
            let mut fields: Vec<_> = self.field_errors.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            let mut first = true;
            for (field, errors) in fields {
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for eventmgt-rs.
#[derive(Error, Debug)]
pub enum EventMgtError {
    // ── ORM errors ───────────────────────────────────────────────────

    /// A row could not be mapped onto a model (missing or mistyped column).
    #[error("Database error: {0}")]
    DatabaseError(String),

    // ── Validation ───────────────────────────────────────────────────

    /// One or more submitted registration fields failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred, e.g. a settings file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ValidationError> for EventMgtError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err)
    }
}

impl From<serde_json::Error> for EventMgtError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, EventMgtError>`.
pub type EventMgtResult<T> = Result<T, EventMgtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_simple() {
        let err = ValidationError::new("This field is required.", "required");
        assert_eq!(err.to_string(), "This field is required.");
    }

    #[test]
    fn test_validation_error_display_field_errors_sorted() {
        let mut field_errors = HashMap::new();
        field_errors.insert(
            "field_2".to_string(),
            vec![ValidationError::new("Required.", "required")],
        );
        field_errors.insert(
            "field_1".to_string(),
            vec![ValidationError::new("Invalid.", "invalid_choice")],
        );
        let err = ValidationError::with_field_errors(field_errors);
        assert_eq!(err.to_string(), "field_1: Invalid.; field_2: Required.");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Required.", "required").with_param("title", "Name");
        assert_eq!(err.params.get("title").unwrap(), "Name");
    }

    #[test]
    fn test_has_field_error() {
        let mut field_errors = HashMap::new();
        field_errors.insert("field_1".to_string(), vec![]);
        let err = ValidationError::with_field_errors(field_errors);
        assert!(!err.has_field_error("field_1"));
        assert!(!err.has_field_error("field_2"));
    }

    #[test]
    fn test_error_display() {
        let err = EventMgtError::DatabaseError("Column 'uid' not found in row".into());
        assert_eq!(err.to_string(), "Database error: Column 'uid' not found in row");
        let err = EventMgtError::from(ValidationError::new("Bad.", "invalid"));
        assert_eq!(err.to_string(), "Validation error: Bad.");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EventMgtError = io_err.into();
        assert!(matches!(err, EventMgtError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: EventMgtError = json_err.into();
        assert!(matches!(err, EventMgtError::SerializationError(_)));
    }
}
