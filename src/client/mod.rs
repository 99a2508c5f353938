//! Client-form validation and submit-time normalization.
//!
//! Ties the individual validators together the way the CRM's client form
//! uses them: every field is checked and all problems are reported at once,
//! then accepted input is normalized into a [`ClientRecord`].
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use ibercheck::client::*;
//!
//! let form = ClientFormBuilder::new("Lucía", "García Pérez", "12345678z")
//!     .address("Calle Mayor 1", "28013", "Madrid", "Madrid")
//!     .email("Lucia@Example.com")
//!     .phone("666 123 456")
//!     .marital_status(MaritalStatus::Single)
//!     .bank_account("es79 2100 0813 6101 2345 6789")
//!     .build();
//!
//! assert!(validate_client_form(&form).is_empty());
//! assert_eq!(bank_preview(&form.bank_account), "CaixaBank");
//!
//! let record = form.submit(Utc::now()).unwrap();
//! assert_eq!(record.dni.to_string(), "12345678Z");
//! assert_eq!(record.bank_account.formatted(), "ES79 2100 0813 6101 2345 6789");
//! ```

mod builder;
mod error;
mod search;
mod types;
mod validation;

pub use builder::ClientFormBuilder;
pub use error::ClientError;
pub use search::filter_clients;
pub use types::{ClientForm, ClientRecord, MaritalStatus};
pub use validation::{bank_preview, validate_client_form};
