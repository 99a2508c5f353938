//! Spanish personal identifiers: DNI (citizens) and NIE (foreign residents).
//!
//! Both carry a control letter computed as `number mod 23` into a fixed
//! 23-letter table. The boolean validators never panic and never error;
//! the typed parsers report why a value was rejected.
//!
//! # Example
//!
//! ```
//! use ibercheck::identity::*;
//!
//! assert!(validate_dni("12345678Z"));
//! assert!(validate_nie("X1234567L"));
//! assert!(validate_dni_or_nie("y1234567x"));
//!
//! let doc: IdentityDocument = "12345678z".parse().unwrap();
//! assert_eq!(doc.to_string(), "12345678Z");
//! ```

mod dni;
mod document;
mod error;
mod letters;
mod nie;

pub use dni::{Dni, validate_dni};
pub use document::{IdentityDocument, validate_dni_or_nie};
pub use error::IdentityError;
pub use letters::{CONTROL_LETTERS, control_letter};
pub use nie::{Nie, NiePrefix, validate_nie};
