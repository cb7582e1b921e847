//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Failure raised while reading option attributes during scoring.
///
/// Never fatal: the caller substitutes the neutral score (or skips the rule)
/// and records a warning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("attribute '{key}' should be {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("attribute '{key}' has an invalid value: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ScoringError {
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        ScoringError::TypeMismatch {
            key: key.into(),
            expected,
        }
    }

    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoringError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Input shape errors
    InvalidOptionCount,
    InvalidOption,
    InvalidPriority,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidOptionCount => "INVALID_OPTION_COUNT",
            ErrorCode::InvalidOption => "INVALID_OPTION",
            ErrorCode::InvalidPriority => "INVALID_PRIORITY",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// The option set must contain between 2 and 3 entries.
    pub fn invalid_option_count(actual: usize) -> Self {
        Self::new(
            ErrorCode::InvalidOptionCount,
            format!("Expected 2 or 3 options to compare, got {}", actual),
        )
        .with_detail("field", "options")
        .with_detail("count", actual.to_string())
    }

    /// A single option failed structural validation. `reason` tells the
    /// failures apart (`empty_name`, `duplicate`).
    pub fn invalid_option(
        index: usize,
        field: impl Into<String>,
        reason: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorCode::InvalidOption, message)
            .with_detail("field", field.into())
            .with_detail("index", index.to_string())
            .with_detail("reason", reason)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the field detail, if the error names one.
    pub fn field(&self) -> Option<&str> {
        self.details.get("field").map(String::as_str)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("priorities.cost", 1, 5, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'priorities.cost' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::invalid_option_count(4);
        assert_eq!(
            format!("{}", err),
            "[INVALID_OPTION_COUNT] Expected 2 or 3 options to compare, got 4"
        );
        assert_eq!(err.field(), Some("options"));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::invalid_option(1, "name", "duplicate", "Option 'AWS' appears more than once")
            .with_detail("option", "AWS");

        assert_eq!(err.code, ErrorCode::InvalidOption);
        assert_eq!(err.details.get("index"), Some(&"1".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"duplicate".to_string()));
        assert_eq!(err.details.get("option"), Some(&"AWS".to_string()));
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: DomainError = ValidationError::out_of_range("priorities.performance", 1, 5, 0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.field(), Some("priorities.performance"));
    }

    #[test]
    fn scoring_error_displays_key() {
        let err = ScoringError::type_mismatch("marketShare", "a number");
        assert_eq!(err.to_string(), "attribute 'marketShare' should be a number");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidOptionCount), "INVALID_OPTION_COUNT");
        assert_eq!(format!("{}", ErrorCode::InvalidOption), "INVALID_OPTION");
    }
}
