use thiserror::Error;

/// Why a Spanish IBAN or domestic account code was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// Not `ES` followed by exactly 22 digits (after removing whitespace).
    #[error("invalid Spanish IBAN format: expected ES followed by 22 digits")]
    Format,

    /// Well-formed, but MOD 97-10 does not leave a remainder of 1.
    #[error("IBAN check digits do not match (remainder {remainder}, expected 1)")]
    Checksum {
        /// Remainder of the rearranged IBAN modulo 97.
        remainder: u32,
    },

    /// Domestic account code (CCC) is not exactly 20 digits.
    #[error("invalid domestic account code: expected 20 digits")]
    DomesticFormat,
}
