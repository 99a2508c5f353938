//! NIE (Número de Identidad de Extranjero).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IdentityError;
use super::letters::{control_letter, digits_value};

/// Leading letter of a NIE. It stands in for the first digit of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NiePrefix {
    X,
    Y,
    Z,
}

impl NiePrefix {
    /// Digit substituted for the prefix when computing the control letter.
    pub fn digit(self) -> u32 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The prefix letter.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    fn from_ascii(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'X' => Some(Self::X),
            b'Y' => Some(Self::Y),
            b'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

/// A validated NIE: prefix letter, 7 digits and control letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nie {
    prefix: NiePrefix,
    number: u32,
    letter: char,
}

impl Nie {
    /// Parse and check a NIE such as `"X1234567L"`. Case-insensitive.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let bytes = input.as_bytes();
        if bytes.len() != 9 {
            tracing::trace!(len = input.len(), "NIE rejected: length");
            return Err(IdentityError::NieFormat);
        }
        let prefix = NiePrefix::from_ascii(bytes[0]).ok_or(IdentityError::NieFormat)?;
        if !bytes[1..8].iter().all(u8::is_ascii_digit) || !bytes[8].is_ascii_alphabetic() {
            tracing::trace!("NIE rejected: format");
            return Err(IdentityError::NieFormat);
        }

        let number = digits_value(&bytes[1..8]);
        let found = char::from(bytes[8].to_ascii_uppercase());
        let expected = control_letter(prefix.digit() * 10_000_000 + number);
        if found != expected {
            tracing::trace!("NIE rejected: control letter");
            return Err(IdentityError::ControlLetter { expected, found });
        }

        Ok(Self {
            prefix,
            number,
            letter: found,
        })
    }

    /// Build a NIE from its prefix and 7-digit number, computing the control letter.
    ///
    /// Returns `None` if `number` has more than 7 digits.
    pub fn from_parts(prefix: NiePrefix, number: u32) -> Option<Self> {
        (number <= 9_999_999).then(|| Self {
            prefix,
            number,
            letter: control_letter(prefix.digit() * 10_000_000 + number),
        })
    }

    pub fn prefix(&self) -> NiePrefix {
        self.prefix
    }

    /// The 7 digits following the prefix.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The (uppercase) control letter.
    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for Nie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:07}{}", self.prefix.as_char(), self.number, self.letter)
    }
}

impl FromStr for Nie {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Nie {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Nie> for String {
    fn from(nie: Nie) -> Self {
        nie.to_string()
    }
}

/// Validate a Spanish NIE (X/Y/Z + 7 digits + control letter).
///
/// Returns `false` for any malformed input; never panics.
pub fn validate_nie(nie: &str) -> bool {
    Nie::parse(nie).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_for_each_prefix() {
        assert!(validate_nie("X1234567L"));
        assert!(validate_nie("Y1234567X"));
        assert!(validate_nie("Z1234567R"));
    }

    #[test]
    fn case_insensitive() {
        let nie = Nie::parse("x1234567l").unwrap();
        assert_eq!(nie.prefix(), NiePrefix::X);
        assert_eq!(nie.to_string(), "X1234567L");
    }

    #[test]
    fn prefix_changes_letter() {
        // Same digits, different prefix: each prefix needs its own letter.
        assert!(!validate_nie("Y1234567L"));
        assert!(!validate_nie("Z1234567L"));
    }

    #[test]
    fn wrong_letter() {
        assert_eq!(
            Nie::parse("X1234567A"),
            Err(IdentityError::ControlLetter {
                expected: 'L',
                found: 'A'
            })
        );
    }

    #[test]
    fn bad_shapes() {
        for input in ["", "A1234567L", "X123456L", "X12345678L", "X123456AL", "12345678Z", "X1234567"] {
            assert_eq!(Nie::parse(input), Err(IdentityError::NieFormat), "{input:?}");
        }
    }

    #[test]
    fn from_parts() {
        let nie = Nie::from_parts(NiePrefix::Y, 1_234_567).unwrap();
        assert_eq!(nie.to_string(), "Y1234567X");
        assert!(Nie::from_parts(NiePrefix::X, 10_000_000).is_none());
    }

    #[test]
    fn leading_zeros_kept() {
        let nie = Nie::from_parts(NiePrefix::X, 42).unwrap();
        assert_eq!(nie.to_string().len(), 9);
        assert!(nie.to_string().starts_with("X0000042"));
    }
}
