use thiserror::Error;

/// Why a Spanish phone number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PhoneError {
    /// Not exactly 9 digits once whitespace is removed.
    #[error("phone number must have 9 digits, got {0} characters")]
    Length(usize),

    /// Contains something other than ASCII digits.
    #[error("phone number must contain only digits")]
    NonDigit,

    /// First digit is not 6, 7, 8 or 9.
    #[error("phone number must start with 6, 7, 8 or 9, got '{0}'")]
    Prefix(char),
}
