use thiserror::Error;

/// Why a DNI or NIE was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdentityError {
    /// Not 8 digits followed by a letter.
    #[error("invalid DNI format: expected 8 digits followed by a letter")]
    DniFormat,

    /// Not X/Y/Z, 7 digits and a letter.
    #[error("invalid NIE format: expected X, Y or Z, 7 digits and a letter")]
    NieFormat,

    /// Well-formed, but the control letter does not match the number.
    #[error("wrong control letter: expected '{expected}', found '{found}'")]
    ControlLetter {
        /// Letter computed from the number.
        expected: char,
        /// Letter present in the input (uppercased).
        found: char,
    },
}

impl IdentityError {
    /// `true` for a shape error, `false` for a control letter mismatch.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::DniFormat | Self::NieFormat)
    }
}
