//! Shared building blocks: input normalization and form-level validation errors.
//!
//! Everything in here is used by the `identity`, `banking`, `contact` and
//! `client` modules; nothing performs I/O.

mod error;
mod text;

pub use error::*;
pub use text::{compact_upper, is_ascii_digits, strip_whitespace};
