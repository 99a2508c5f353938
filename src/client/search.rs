//! Client list filtering.

use super::types::{ClientRecord, MaritalStatus};

impl ClientRecord {
    /// Case-insensitive substring match on first name, last name, DNI/NIE,
    /// e-mail and municipality. An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email_1.as_str(),
            self.municipality.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
            || self.dni.to_string().to_lowercase().contains(&term)
    }
}

/// Records matching `term` and, if given, the marital status.
pub fn filter_clients<'a>(
    records: &'a [ClientRecord],
    term: &str,
    status: Option<MaritalStatus>,
) -> Vec<&'a ClientRecord> {
    records
        .iter()
        .filter(|r| r.matches(term))
        .filter(|r| status.is_none_or(|s| r.marital_status == s))
        .collect()
}
