//! Spanish national phone numbers (9 digits, no country prefix).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PhoneError;
use crate::core::{is_ascii_digits, strip_whitespace};

/// Mobile or fixed line, by leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// Starts with 6 or 7.
    Mobile,
    /// Starts with 8 or 9.
    Landline,
}

/// A validated 9-digit Spanish phone number, stored without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpanishPhone(String);

impl SpanishPhone {
    /// Parse a phone number such as `"666 123 456"`. Whitespace anywhere is
    /// ignored.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let digits = strip_whitespace(input);
        let count = digits.chars().count();
        if count != 9 {
            return Err(PhoneError::Length(count));
        }
        if !is_ascii_digits(&digits) {
            return Err(PhoneError::NonDigit);
        }
        match digits.as_bytes()[0] {
            b'6'..=b'9' => Ok(Self(digits)),
            other => Err(PhoneError::Prefix(char::from(other))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> PhoneKind {
        match self.0.as_bytes()[0] {
            b'6' | b'7' => PhoneKind::Mobile,
            _ => PhoneKind::Landline,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.kind() == PhoneKind::Mobile
    }
}

impl fmt::Display for SpanishPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpanishPhone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SpanishPhone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SpanishPhone> for String {
    fn from(phone: SpanishPhone) -> Self {
        phone.0
    }
}

/// Validate a Spanish phone number: 9 digits starting with 6-9, whitespace ignored.
pub fn validate_spanish_phone(phone: &str) -> bool {
    SpanishPhone::parse(phone).is_ok()
}
