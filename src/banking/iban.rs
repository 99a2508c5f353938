//! Spanish IBAN parsing, MOD 97-10 check and display formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bank_codes::bank_name;
use super::error::IbanError;
use crate::core::{compact_upper, is_ascii_digits, strip_whitespace};

/// Length of a compact Spanish IBAN: `ES` + 2 check digits + 20 digits.
pub const SPANISH_IBAN_LEN: usize = 24;

/// ISO 7064 MOD 97-10 remainder of an alphanumeric string.
///
/// Letters count as two digits, `A` = 10 through `Z` = 35. The remainder is
/// accumulated digit by digit, so input length is unbounded. Returns `None`
/// if the input contains anything other than ASCII digits and uppercase
/// letters.
pub fn mod97(input: &str) -> Option<u32> {
    input.bytes().try_fold(0u32, |rem, b| match b {
        b'0'..=b'9' => Some((rem * 10 + u32::from(b - b'0')) % 97),
        b'A'..=b'Z' => Some((rem * 100 + u32::from(b) - 55) % 97),
        _ => None,
    })
}

/// Remainder of an IBAN with its first four characters moved to the end.
fn rearranged_remainder(compact: &str) -> Option<u32> {
    let (head, tail) = compact.split_at_checked(4)?;
    mod97(&format!("{tail}{head}"))
}

/// A validated Spanish IBAN, stored compact and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpanishIban(String);

impl SpanishIban {
    /// Parse and check a Spanish IBAN. Whitespace anywhere is ignored and
    /// case does not matter.
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        let compact = compact_upper(input);
        let well_formed = compact.len() == SPANISH_IBAN_LEN
            && compact.starts_with("ES")
            && is_ascii_digits(&compact[2..]);
        if !well_formed {
            tracing::trace!(len = compact.len(), "IBAN rejected: format");
            return Err(IbanError::Format);
        }

        let remainder = rearranged_remainder(&compact).ok_or(IbanError::Format)?;
        if remainder != 1 {
            tracing::trace!(remainder, "IBAN rejected: checksum");
            return Err(IbanError::Checksum { remainder });
        }
        Ok(Self(compact))
    }

    /// Build an IBAN from the 20-digit domestic account code (CCC),
    /// computing the check digits. Whitespace is ignored.
    ///
    /// The CCC's own control digits are carried over as given.
    pub fn from_domestic(ccc: &str) -> Result<Self, IbanError> {
        let ccc = strip_whitespace(ccc);
        if ccc.len() != 20 || !is_ascii_digits(&ccc) {
            return Err(IbanError::DomesticFormat);
        }
        let remainder = mod97(&format!("{ccc}ES00")).ok_or(IbanError::DomesticFormat)?;
        Ok(Self(format!("ES{:02}{ccc}", 98 - remainder)))
    }

    /// Compact form, e.g. `"ES7921000813610123456789"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two IBAN check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// The 4-digit bank code (entidad).
    pub fn bank_code(&self) -> &str {
        &self.0[4..8]
    }

    /// The 4-digit branch code (oficina).
    pub fn branch_code(&self) -> &str {
        &self.0[8..12]
    }

    /// The 2 domestic control digits.
    pub fn control_digits(&self) -> &str {
        &self.0[12..14]
    }

    /// The 10-digit account number.
    pub fn account_number(&self) -> &str {
        &self.0[14..]
    }

    /// The 20-digit domestic account code (everything after the check digits).
    pub fn domestic(&self) -> &str {
        &self.0[4..]
    }

    /// Issuing bank, if the bank code is known.
    pub fn bank_name(&self) -> Option<&'static str> {
        bank_name(self.bank_code())
    }

    /// Display form, grouped in blocks of four.
    pub fn formatted(&self) -> String {
        format_iban(&self.0)
    }
}

impl fmt::Display for SpanishIban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpanishIban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SpanishIban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SpanishIban> for String {
    fn from(iban: SpanishIban) -> Self {
        iban.0
    }
}

impl AsRef<str> for SpanishIban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a Spanish IBAN (`ES` + 22 digits with correct MOD 97-10 check digits).
///
/// Whitespace is ignored and case does not matter. Wrong length and bad
/// checksum both simply return `false`.
pub fn validate_spanish_iban(iban: &str) -> bool {
    SpanishIban::parse(iban).is_ok()
}

/// Format an IBAN for display: whitespace removed, uppercased, then grouped
/// in blocks of four separated by single spaces.
///
/// Pure text transform; the input is not validated.
pub fn format_iban(iban: &str) -> String {
    let compact = compact_upper(iban);
    let mut out = String::with_capacity(compact.len() + compact.len() / 4);
    for (i, c) in compact.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAIXA: &str = "ES7921000813610123456789";

    #[test]
    fn valid_compact() {
        assert!(validate_spanish_iban(CAIXA));
    }

    #[test]
    fn valid_grouped_lowercase() {
        assert!(validate_spanish_iban("es79 2100 0813 6101 2345 6789"));
        assert!(validate_spanish_iban("  ES79\t2100 0813\n6101 2345 6789 "));
    }

    #[test]
    fn bad_check_digits() {
        assert!(matches!(
            SpanishIban::parse("ES8021000813610123456789"),
            Err(IbanError::Checksum { .. })
        ));
    }

    #[test]
    fn wrong_shapes() {
        for input in [
            "",
            "ES79",
            "ES792100081361012345678",
            "ES79210008136101234567890",
            "DE89370400440532013000",
            "FR7630006000011234567890189",
            "ES79210008136101234567A9",
            "EX7921000813610123456789",
            "ES79-2100-0813-6101-2345-6789",
        ] {
            assert_eq!(SpanishIban::parse(input), Err(IbanError::Format), "{input:?}");
        }
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert!(!validate_spanish_iban("ES７９21000813610123456789"));
    }

    #[test]
    fn components() {
        let iban = SpanishIban::parse(CAIXA).unwrap();
        assert_eq!(iban.check_digits(), "79");
        assert_eq!(iban.bank_code(), "2100");
        assert_eq!(iban.branch_code(), "0813");
        assert_eq!(iban.control_digits(), "61");
        assert_eq!(iban.account_number(), "0123456789");
        assert_eq!(iban.domestic(), "21000813610123456789");
        assert_eq!(iban.bank_name(), Some("CaixaBank"));
    }

    #[test]
    fn from_domestic_computes_check_digits() {
        let iban = SpanishIban::from_domestic("21000813610123456789").unwrap();
        assert_eq!(iban.as_str(), CAIXA);
        let iban = SpanishIban::from_domestic("0182 0000 00 0000000000").unwrap();
        assert_eq!(iban.as_str(), "ES9101820000000000000000");
    }

    #[test]
    fn from_domestic_rejects_bad_input() {
        assert_eq!(
            SpanishIban::from_domestic("2100081361012345678"),
            Err(IbanError::DomesticFormat)
        );
        assert_eq!(
            SpanishIban::from_domestic("2100081361012345678X"),
            Err(IbanError::DomesticFormat)
        );
    }

    #[test]
    fn mod97_letters_and_digits() {
        assert_eq!(mod97("0"), Some(0));
        assert_eq!(mod97("97"), Some(0));
        assert_eq!(mod97("98"), Some(1));
        // "ES" expands to 1428
        assert_eq!(mod97("ES"), mod97("1428"));
        assert_eq!(mod97("es"), None);
        assert_eq!(mod97("1 2"), None);
    }

    #[test]
    fn mod97_of_rearranged_valid_iban_is_one() {
        assert_eq!(rearranged_remainder(CAIXA), Some(1));
        assert_eq!(rearranged_remainder("ES7"), None);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_iban(" es7921000813610123456789 "), "ES79 2100 0813 6101 2345 6789");
        assert_eq!(format_iban("ES79 2100 0813 6101 2345 6789"), "ES79 2100 0813 6101 2345 6789");
        assert_eq!(format_iban(""), "");
        assert_eq!(format_iban("abc"), "ABC");
        assert_eq!(format_iban("abcd"), "ABCD");
        assert_eq!(format_iban("abcde"), "ABCD E");
    }

    #[test]
    fn formatted_accessor() {
        let iban = SpanishIban::parse(CAIXA).unwrap();
        assert_eq!(iban.formatted(), "ES79 2100 0813 6101 2345 6789");
        assert_eq!(iban.to_string(), CAIXA);
    }

    #[test]
    fn serde_validates() {
        let iban: SpanishIban = serde_json::from_str("\"es79 2100 0813 6101 2345 6789\"").unwrap();
        assert_eq!(serde_json::to_string(&iban).unwrap(), format!("\"{CAIXA}\""));
        assert!(serde_json::from_str::<SpanishIban>("\"ES8021000813610123456789\"").is_err());
    }
}
