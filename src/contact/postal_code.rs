/// Check a Spanish postal code: exactly five ASCII digits.
pub fn validate_postal_code(code: &str) -> bool {
    code.len() == 5 && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digits() {
        assert!(validate_postal_code("28001"));
        assert!(validate_postal_code("08001"));
        assert!(!validate_postal_code("2800"));
        assert!(!validate_postal_code("280011"));
        assert!(!validate_postal_code("28 01"));
        assert!(!validate_postal_code(" 28001"));
        assert!(!validate_postal_code(""));
    }
}
