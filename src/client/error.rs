use thiserror::Error;

use crate::core::ValidationError;

/// Errors from submitting a client form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// One or more fields failed validation.
    #[error("client form has {} invalid field(s): {}", .0.len(), join(.0))]
    Invalid(Vec<ValidationError>),
}

impl ClientError {
    /// The individual field errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
