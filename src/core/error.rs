use serde::{Deserialize, Serialize};

/// Category of a form-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// A mandatory field was left empty.
    Required,
    /// The value does not have the expected shape (length, alphabet, pattern).
    InvalidFormat,
    /// The value has the right shape but its check letter or check digits are wrong.
    InvalidChecksum,
}

impl ErrorCode {
    /// Stable machine-readable name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidChecksum => "invalid_checksum",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation error with field name, message and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the invalid form field (e.g. "dni", "bank_account").
    pub field: String,
    /// Human-readable error description, suitable for showing next to the field.
    pub message: String,
    /// Failure category, when one applies.
    pub code: Option<ErrorCode>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{}] {}: {}", code, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ValidationError {
    /// Create a validation error without a category.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Create a validation error with a category.
    pub fn with_code(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: Some(code),
        }
    }

    /// Shorthand for a [`ErrorCode::Required`] error.
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_code(field, message, ErrorCode::Required)
    }
}
