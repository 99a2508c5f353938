//! Spanish IBAN validation, display formatting and bank lookup.
//!
//! A Spanish IBAN is `ES` + 2 check digits + the 20-digit domestic account
//! code (bank 4, branch 4, control 2, account 10). Check digits follow
//! ISO 7064 MOD 97-10.
//!
//! # Example
//!
//! ```
//! use ibercheck::banking::*;
//!
//! assert!(validate_spanish_iban("ES79 2100 0813 6101 2345 6789"));
//! assert_eq!(bank_name_from_iban("ES7921000813610123456789"), "CaixaBank");
//! assert_eq!(format_iban("es7921000813610123456789"), "ES79 2100 0813 6101 2345 6789");
//!
//! let iban = SpanishIban::from_domestic("0049 1500 05 1234567892").unwrap();
//! assert_eq!(iban.as_str(), "ES6000491500051234567892");
//! ```

mod bank_codes;
mod error;
mod iban;

pub use bank_codes::{UNRECOGNIZED_BANK, bank_name, bank_name_from_iban};
pub use error::IbanError;
pub use iban::{SPANISH_IBAN_LEN, SpanishIban, format_iban, mod97, validate_spanish_iban};
