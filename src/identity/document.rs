//! Either kind of personal identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dni::{Dni, validate_dni};
use super::error::IdentityError;
use super::nie::{Nie, validate_nie};

/// A validated DNI or NIE, as accepted by a single "DNI/NIE" form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IdentityDocument {
    Dni(Dni),
    Nie(Nie),
}

impl IdentityDocument {
    /// Try DNI first, then NIE.
    ///
    /// When neither matches, the error comes from the format the input looks
    /// like: a leading digit reports the DNI error, anything else the NIE error.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let dni_err = match Dni::parse(input) {
            Ok(dni) => return Ok(Self::Dni(dni)),
            Err(e) => e,
        };
        let nie_err = match Nie::parse(input) {
            Ok(nie) => return Ok(Self::Nie(nie)),
            Err(e) => e,
        };
        if input.as_bytes().first().is_some_and(u8::is_ascii_digit) {
            Err(dni_err)
        } else {
            Err(nie_err)
        }
    }

    pub fn is_dni(&self) -> bool {
        matches!(self, Self::Dni(_))
    }

    pub fn is_nie(&self) -> bool {
        matches!(self, Self::Nie(_))
    }

    /// The control letter, whichever the kind.
    pub fn letter(&self) -> char {
        match self {
            Self::Dni(dni) => dni.letter(),
            Self::Nie(nie) => nie.letter(),
        }
    }
}

impl fmt::Display for IdentityDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dni(dni) => fmt::Display::fmt(dni, f),
            Self::Nie(nie) => fmt::Display::fmt(nie, f),
        }
    }
}

impl FromStr for IdentityDocument {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IdentityDocument {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdentityDocument> for String {
    fn from(doc: IdentityDocument) -> Self {
        doc.to_string()
    }
}

/// Validate a DNI or a NIE.
///
/// `true` iff [`validate_dni`] or [`validate_nie`] accepts the input.
pub fn validate_dni_or_nie(value: &str) -> bool {
    validate_dni(value) || validate_nie(value)
}
