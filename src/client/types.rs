use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::banking::SpanishIban;
use crate::contact::SpanishPhone;
use crate::identity::IdentityDocument;

/// Marital status options offered by the client form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    /// Married under community property (gananciales).
    MarriedCommunity,
    /// Married under separation of property.
    MarriedSeparation,
    DomesticPartnership,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::MarriedCommunity,
        Self::MarriedSeparation,
        Self::DomesticPartnership,
        Self::Divorced,
        Self::Widowed,
    ];

    /// Stored value, e.g. `"married_community"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedCommunity => "married_community",
            Self::MarriedSeparation => "married_separation",
            Self::DomesticPartnership => "domestic_partnership",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
        }
    }

    /// Spanish label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Soltero/a",
            Self::MarriedCommunity => "Casado/a en gananciales",
            Self::MarriedSeparation => "Casado/a en separación de bienes",
            Self::DomesticPartnership => "Pareja de hecho",
            Self::Divorced => "Divorciado/a",
            Self::Widowed => "Viudo/a",
        }
    }
}

/// Raw client-form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientForm {
    pub first_name: String,
    pub last_name: String,
    /// DNI or NIE.
    pub dni: String,
    pub address: String,
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    pub email_1: String,
    pub phone_1: String,
    pub phone_2: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    /// Spanish IBAN, grouped or compact.
    pub bank_account: String,
    pub observations: Option<String>,
}

/// A validated, normalized client as it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub first_name: String,
    pub last_name: String,
    /// Uppercased DNI or NIE.
    pub dni: IdentityDocument,
    pub address: String,
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    /// Lowercased.
    pub email_1: String,
    pub phone_1: SpanishPhone,
    pub phone_2: Option<SpanishPhone>,
    pub marital_status: MaritalStatus,
    /// Serialized in display form (`ES79 2100 ...`).
    #[serde(with = "display_iban")]
    pub bank_account: SpanishIban,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// IBAN (de)serialization in grouped display form; validates on the way in.
mod display_iban {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::banking::SpanishIban;

    pub fn serialize<S: Serializer>(iban: &SpanishIban, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&iban.formatted())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SpanishIban, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SpanishIban::parse(&raw).map_err(D::Error::custom)
    }
}

impl ClientForm {
    /// Prefill a form from a stored record, for editing.
    pub fn from_record(record: &ClientRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            dni: record.dni.to_string(),
            address: record.address.clone(),
            postal_code: record.postal_code.clone(),
            municipality: record.municipality.clone(),
            province: record.province.clone(),
            email_1: record.email_1.clone(),
            phone_1: record.phone_1.to_string(),
            phone_2: record.phone_2.as_ref().map(ToString::to_string),
            marital_status: Some(record.marital_status),
            bank_account: record.bank_account.formatted(),
            observations: record.observations.clone(),
        }
    }
}
