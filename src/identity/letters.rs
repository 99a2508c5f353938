//! DNI/NIE control letter table.

/// Control letters indexed by `number mod 23`.
pub const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Control letter for the numeric body of a DNI (or a NIE with its prefix
/// already mapped to a digit).
pub fn control_letter(number: u32) -> char {
    char::from(CONTROL_LETTERS[(number % 23) as usize])
}

/// Fold a run of ASCII digits into a number. Callers check the digits first.
pub(super) fn digits_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicates() {
        let mut seen = CONTROL_LETTERS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn table_excludes_ambiguous_letters() {
        for letter in b"IOU" {
            assert!(!CONTROL_LETTERS.contains(letter));
        }
        assert!(CONTROL_LETTERS.is_ascii());
        assert!(!CONTROL_LETTERS.iter().any(|&b| char::from(b) == 'Ñ'));
    }

    #[test]
    fn known_letters() {
        assert_eq!(control_letter(0), 'T');
        assert_eq!(control_letter(1), 'R');
        assert_eq!(control_letter(22), 'E');
        assert_eq!(control_letter(23), 'T');
        assert_eq!(control_letter(12_345_678), 'Z');
    }

    #[test]
    fn digits_fold() {
        assert_eq!(digits_value(b"00000000"), 0);
        assert_eq!(digits_value(b"12345678"), 12_345_678);
        assert_eq!(digits_value(b"99999999"), 99_999_999);
    }
}
