//! Text normalization shared by the validators.
//!
//! Form inputs arrive as free text. Identifiers are compared uppercased and
//! account numbers are typed in blocks of four, so most validators start by
//! removing whitespace and uppercasing.

/// Remove every whitespace character (including interior ones).
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove every whitespace character and uppercase the rest.
///
/// ```
/// assert_eq!(ibercheck::core::compact_upper(" es79 2100 "), "ES792100");
/// ```
pub fn compact_upper(input: &str) -> String {
    strip_whitespace(input).to_uppercase()
}

/// `true` if `input` is non-empty and made only of ASCII digits `0-9`.
///
/// Full-width and other non-ASCII digits are rejected.
pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_interior_whitespace() {
        assert_eq!(strip_whitespace(" 666 123\t456\n"), "666123456");
    }

    #[test]
    fn strips_unicode_whitespace() {
        // no-break space and ideographic space
        assert_eq!(strip_whitespace("ES79\u{a0}2100\u{3000}0813"), "ES7921000813");
    }

    #[test]
    fn compact_upper_uppercases() {
        assert_eq!(compact_upper("es79 2100 0813"), "ES7921000813");
    }

    #[test]
    fn empty_input() {
        assert_eq!(compact_upper(""), "");
        assert!(!is_ascii_digits(""));
    }

    #[test]
    fn ascii_digits_only() {
        assert!(is_ascii_digits("0123456789"));
        assert!(!is_ascii_digits("12a4"));
        assert!(!is_ascii_digits("１２３"));
        assert!(!is_ascii_digits("١٢٣"));
    }
}
