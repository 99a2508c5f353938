//! DNI (Documento Nacional de Identidad).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IdentityError;
use super::letters::{control_letter, digits_value};

/// A validated DNI: 8-digit number and its control letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dni {
    number: u32,
    letter: char,
}

impl Dni {
    /// Parse and check a DNI such as `"12345678Z"`.
    ///
    /// The letter is matched case-insensitively. Surrounding whitespace is
    /// not trimmed; callers that accept padded input trim first.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 9
            && bytes[..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_alphabetic();
        if !well_formed {
            tracing::trace!(len = input.len(), "DNI rejected: format");
            return Err(IdentityError::DniFormat);
        }

        let number = digits_value(&bytes[..8]);
        let found = char::from(bytes[8].to_ascii_uppercase());
        let expected = control_letter(number);
        if found != expected {
            tracing::trace!("DNI rejected: control letter");
            return Err(IdentityError::ControlLetter { expected, found });
        }

        Ok(Self {
            number,
            letter: found,
        })
    }

    /// Build a DNI from its number, computing the control letter.
    ///
    /// Returns `None` if `number` has more than 8 digits.
    pub fn from_number(number: u32) -> Option<Self> {
        (number <= 99_999_999).then(|| Self {
            number,
            letter: control_letter(number),
        })
    }

    /// The 8-digit numeric body.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The (uppercase) control letter.
    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}{}", self.number, self.letter)
    }
}

impl FromStr for Dni {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Dni {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Dni> for String {
    fn from(dni: Dni) -> Self {
        dni.to_string()
    }
}

/// Validate a Spanish DNI (8 digits + control letter).
///
/// Returns `false` for any malformed input; never panics.
pub fn validate_dni(dni: &str) -> bool {
    Dni::parse(dni).is_ok()
}
