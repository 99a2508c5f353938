//! Contact details: Spanish phone numbers, e-mail addresses, postal codes.

mod email;
mod error;
mod phone;
mod postal_code;

pub use email::validate_email;
pub use error::PhoneError;
pub use phone::{PhoneKind, SpanishPhone, validate_spanish_phone};
pub use postal_code::validate_postal_code;
