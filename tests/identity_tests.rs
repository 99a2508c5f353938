#![cfg(feature = "identity")]

use ibercheck::identity::*;

// ---------------------------------------------------------------------------
// DNI
// ---------------------------------------------------------------------------

#[test]
fn dni_reference_value() {
    // 12345678 mod 23 = 14 → 'Z'
    assert_eq!(12_345_678 % 23, 14);
    assert_eq!(char::from(CONTROL_LETTERS[14]), 'Z');
    assert!(validate_dni("12345678Z"));
}

#[test]
fn dni_table_edges() {
    assert!(validate_dni("00000000T"));
    assert!(validate_dni("99999999R"));
    assert!(validate_dni("00000022E"));
    assert!(validate_dni("23456789D"));
}

#[test]
fn dni_every_other_letter_rejected() {
    for letter in b'A'..=b'Z' {
        let candidate = format!("12345678{}", char::from(letter));
        assert_eq!(validate_dni(&candidate), letter == b'Z', "{candidate}");
    }
}

#[test]
fn dni_lowercase_letter() {
    assert!(validate_dni("87654321x"));
}

#[test]
fn dni_whitespace_not_trimmed() {
    assert!(!validate_dni(" 12345678Z"));
    assert!(!validate_dni("12345678 Z"));
    assert!(!validate_dni("12345678Z\n"));
}

#[test]
fn dni_rejects_nie() {
    assert!(!validate_dni("X1234567L"));
}

// ---------------------------------------------------------------------------
// NIE
// ---------------------------------------------------------------------------

#[test]
fn nie_prefix_mapping() {
    // X→0, Y→1, Z→2 in front of the 7 digits
    assert!(validate_nie("X1234567L"));
    assert!(validate_nie("Y1234567X"));
    assert!(validate_nie("Z1234567R"));
    assert_eq!(control_letter(1_234_567), 'L');
    assert_eq!(control_letter(11_234_567), 'X');
    assert_eq!(control_letter(21_234_567), 'R');
}

#[test]
fn nie_wrong_letter() {
    assert!(!validate_nie("X1234567A"));
    assert!(!validate_nie("Y1234567L"));
}

#[test]
fn nie_lowercase() {
    assert!(validate_nie("y1234567x"));
}

#[test]
fn nie_other_prefix_letters() {
    for prefix in ["A", "K", "L", "M", "W"] {
        assert!(!validate_nie(&format!("{prefix}1234567L")));
    }
}

#[test]
fn nie_rejects_dni() {
    assert!(!validate_nie("12345678Z"));
}

// ---------------------------------------------------------------------------
// Combined
// ---------------------------------------------------------------------------

#[test]
fn combined_is_or() {
    for input in [
        "12345678Z",
        "12345678A",
        "X1234567L",
        "X1234567A",
        "",
        "hello",
        "Z0000000M",
        "1234567",
    ] {
        assert_eq!(
            validate_dni_or_nie(input),
            validate_dni(input) || validate_nie(input),
            "{input:?}"
        );
    }
}

#[test]
fn document_kinds() {
    let dni: IdentityDocument = "12345678Z".parse().unwrap();
    let nie: IdentityDocument = "X1234567L".parse().unwrap();
    assert!(dni.is_dni() && !dni.is_nie());
    assert!(nie.is_nie() && !nie.is_dni());
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        Dni::parse("12345678A").unwrap_err().to_string(),
        @"wrong control letter: expected 'Z', found 'A'"
    );
    insta::assert_snapshot!(
        Nie::parse("Q1234567L").unwrap_err().to_string(),
        @"invalid NIE format: expected X, Y or Z, 7 digits and a letter"
    );
    insta::assert_snapshot!(
        Dni::parse("1234").unwrap_err().to_string(),
        @"invalid DNI format: expected 8 digits followed by a letter"
    );
}

#[test]
fn generated_identifiers_validate() {
    for n in [0, 1, 22, 23, 4_567_890, 99_999_999] {
        let dni = Dni::from_number(n).unwrap();
        assert!(validate_dni(&dni.to_string()));
    }
    for prefix in [NiePrefix::X, NiePrefix::Y, NiePrefix::Z] {
        let nie = Nie::from_parts(prefix, 7_654_321).unwrap();
        assert!(validate_nie(&nie.to_string()));
    }
}
