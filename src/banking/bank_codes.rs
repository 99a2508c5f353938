//! Spanish bank codes (the 4 digits after `ES` + check digits).

use crate::core::compact_upper;

/// Label returned by [`bank_name_from_iban`] for a Spanish IBAN whose bank
/// code is not in the table.
pub const UNRECOGNIZED_BANK: &str = "unrecognized bank";

/// Look up the bank name for a 4-digit Spanish bank code.
pub fn bank_name(code: &str) -> Option<&'static str> {
    BANK_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| BANK_CODES[i].1)
}

/// Resolve the issuing bank of a Spanish IBAN.
///
/// Whitespace is ignored and case does not matter. Input that does not start
/// with `ES` yields an empty string; a Spanish IBAN with an unknown (or
/// missing) bank code yields [`UNRECOGNIZED_BANK`]. The IBAN itself is not
/// checked; run [`validate_spanish_iban`](super::validate_spanish_iban) first
/// when that matters.
pub fn bank_name_from_iban(iban: &str) -> String {
    let clean = compact_upper(iban);
    if !clean.starts_with("ES") {
        return String::new();
    }
    let code: String = clean.chars().skip(4).take(4).collect();
    bank_name(&code).unwrap_or(UNRECOGNIZED_BANK).to_string()
}

/// Bank code → display name. Sorted by code for binary search.
static BANK_CODES: &[(&str, &str)] = &[
    ("0049", "Banco Santander"),
    ("0075", "Banco Popular"),
    ("0081", "Banco de Sabadell"),
    ("0128", "Bankinter"),
    ("0182", "BBVA"),
    ("0238", "Banco Pastor"),
    ("0487", "Banco Mare Nostrum"),
    ("1465", "ING Direct"),
    ("2038", "Bankia"),
    ("2080", "Abanca"),
    ("2085", "Ibercaja"),
    ("2095", "Kutxabank"),
    ("2100", "CaixaBank"),
    ("3025", "Caja de Ingenieros"),
    ("3058", "Cajamar"),
    ("3076", "Caja Rural Central"),
    ("3081", "Caja Rural de Navarra"),
    ("3187", "Caja Rural de Castilla-La Mancha"),
];
