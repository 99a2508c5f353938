//! # ibercheck
//!
//! Spanish identity and banking validators for client onboarding forms:
//! DNI and NIE control letters, Spanish IBAN check digits, bank-code lookup,
//! IBAN display formatting and phone numbers.
//!
//! Every validator is a pure function. The boolean and string helpers never
//! panic and never return errors: malformed input simply yields `false`, an
//! empty string, or a fallback label. Typed parsers ([`identity::Dni`],
//! [`banking::SpanishIban`], ...) are available when the reason for a
//! rejection matters.
//!
//! ## Quick Start
//!
//! ```rust
//! use ibercheck::*;
//!
//! assert!(validate_dni("12345678Z"));
//! assert!(validate_nie("X1234567L"));
//! assert!(validate_dni_or_nie("12345678z"));
//!
//! assert!(validate_spanish_iban("ES79 2100 0813 6101 2345 6789"));
//! assert_eq!(bank_name_from_iban("ES7921000813610123456789"), "CaixaBank");
//! assert_eq!(format_iban(" es7921000813610123456789 "), "ES79 2100 0813 6101 2345 6789");
//!
//! assert!(validate_spanish_phone("666 123 456"));
//! assert!(!validate_spanish_phone("512345678"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `identity` (default) | DNI, NIE and combined validation |
//! | `banking` (default) | Spanish IBAN validation, formatting, bank lookup |
//! | `contact` (default) | Phone, e-mail and postal code checks |
//! | `client` | Whole client-form validation and normalization |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "identity")]
pub mod identity;

#[cfg(feature = "banking")]
pub mod banking;

#[cfg(feature = "contact")]
pub mod contact;

#[cfg(feature = "client")]
pub mod client;

// Re-export the boolean/string validators at crate root
#[cfg(feature = "identity")]
pub use crate::identity::{validate_dni, validate_dni_or_nie, validate_nie};

#[cfg(feature = "banking")]
pub use crate::banking::{bank_name_from_iban, format_iban, validate_spanish_iban};

#[cfg(feature = "contact")]
pub use crate::contact::validate_spanish_phone;
