use chrono::{DateTime, Utc};

use super::error::ClientError;
use super::types::{ClientForm, ClientRecord};
use crate::banking::{IbanError, SpanishIban, bank_name_from_iban};
use crate::contact::{PhoneError, SpanishPhone, validate_email, validate_postal_code};
use crate::core::{ErrorCode, ValidationError, strip_whitespace};
use crate::identity::{IdentityDocument, IdentityError};

const MIN_NAME_CHARS: usize = 2;

/// Validate a client form. Returns all validation errors found (not just the first).
///
/// Required fields are checked first; a field that is present is then
/// checked for format. Names need at least two characters. The second
/// phone number is optional and only validated when non-empty.
pub fn validate_client_form(form: &ClientForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if require(&form.first_name, "first_name", "first name is required", &mut errors) {
        check_name_length(&form.first_name, "first_name", &mut errors);
    }
    if require(&form.last_name, "last_name", "last name is required", &mut errors) {
        check_name_length(&form.last_name, "last_name", &mut errors);
    }

    if require(&form.dni, "dni", "DNI/NIE is required", &mut errors) {
        if let Err(e) = IdentityDocument::parse(&form.dni) {
            errors.push(identity_error(e));
        }
    }

    if form.marital_status.is_none() {
        errors.push(ValidationError::required(
            "marital_status",
            "marital status is required",
        ));
    }

    if require(&form.email_1, "email_1", "e-mail is required", &mut errors)
        && !validate_email(&form.email_1)
    {
        errors.push(ValidationError::with_code(
            "email_1",
            "invalid e-mail address",
            ErrorCode::InvalidFormat,
        ));
    }

    if require(&form.phone_1, "phone_1", "phone number is required", &mut errors) {
        if let Err(e) = SpanishPhone::parse(&form.phone_1) {
            errors.push(phone_error("phone_1", e));
        }
    }
    if let Some(phone) = form.phone_2.as_deref().filter(|v| !v.is_empty()) {
        if let Err(e) = SpanishPhone::parse(phone) {
            errors.push(phone_error("phone_2", e));
        }
    }

    require(&form.address, "address", "address is required", &mut errors);
    if require(&form.postal_code, "postal_code", "postal code is required", &mut errors)
        && !validate_postal_code(&form.postal_code)
    {
        errors.push(ValidationError::with_code(
            "postal_code",
            "postal code must have 5 digits",
            ErrorCode::InvalidFormat,
        ));
    }
    require(&form.municipality, "municipality", "municipality is required", &mut errors);
    require(&form.province, "province", "province is required", &mut errors);

    if require(&form.bank_account, "bank_account", "IBAN is required", &mut errors) {
        if let Err(e) = SpanishIban::parse(&form.bank_account) {
            errors.push(iban_error(e));
        }
    }

    tracing::debug!(errors = errors.len(), "client form validated");
    errors
}

/// Bank name to show under the IBAN field while typing.
///
/// Empty unless the IBAN validates; the lookup only runs on a valid IBAN.
pub fn bank_preview(iban: &str) -> String {
    if SpanishIban::parse(iban).is_ok() {
        bank_name_from_iban(iban)
    } else {
        String::new()
    }
}

impl ClientForm {
    /// Validate and normalize a new client.
    ///
    /// The DNI/NIE is uppercased, the e-mail lowercased, phone numbers lose
    /// their whitespace, an empty second phone becomes `None` and the IBAN
    /// is stored validated. `now` becomes both timestamps.
    pub fn submit(self, now: DateTime<Utc>) -> Result<ClientRecord, ClientError> {
        let errors = validate_client_form(&self);
        if !errors.is_empty() {
            return Err(ClientError::Invalid(errors));
        }

        let dni = IdentityDocument::parse(&self.dni).map_err(|e| invalid(identity_error(e)))?;
        let phone_1 =
            SpanishPhone::parse(&self.phone_1).map_err(|e| invalid(phone_error("phone_1", e)))?;
        let phone_2 = blank_to_none(self.phone_2.as_deref())
            .map(SpanishPhone::parse)
            .transpose()
            .map_err(|e| invalid(phone_error("phone_2", e)))?;
        let bank_account =
            SpanishIban::parse(&self.bank_account).map_err(|e| invalid(iban_error(e)))?;
        let marital_status = self.marital_status.ok_or_else(|| {
            invalid(ValidationError::required(
                "marital_status",
                "marital status is required",
            ))
        })?;

        Ok(ClientRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            dni,
            address: self.address,
            postal_code: self.postal_code,
            municipality: self.municipality,
            province: self.province,
            email_1: self.email_1.to_lowercase(),
            phone_1,
            phone_2,
            marital_status,
            bank_account,
            observations: self.observations.filter(|o| !o.trim().is_empty()),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ClientRecord {
    /// Replace this record's data with an edited form, keeping `created_at`.
    ///
    /// On error the record is left unchanged.
    pub fn update(&mut self, form: ClientForm, now: DateTime<Utc>) -> Result<(), ClientError> {
        let created_at = self.created_at;
        let mut updated = form.submit(now)?;
        updated.created_at = created_at;
        *self = updated;
        Ok(())
    }
}

/// Push a required-field error if `value` is blank. Returns `true` if present.
fn require(value: &str, field: &str, message: &str, errors: &mut Vec<ValidationError>) -> bool {
    if value.trim().is_empty() {
        errors.push(ValidationError::required(field, message));
        false
    } else {
        true
    }
}

fn check_name_length(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().chars().count() < MIN_NAME_CHARS {
        errors.push(ValidationError::with_code(
            field,
            format!("must have at least {MIN_NAME_CHARS} characters"),
            ErrorCode::InvalidFormat,
        ));
    }
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !strip_whitespace(v).is_empty())
}

fn invalid(error: ValidationError) -> ClientError {
    ClientError::Invalid(vec![error])
}

fn identity_error(e: IdentityError) -> ValidationError {
    let code = if e.is_format() {
        ErrorCode::InvalidFormat
    } else {
        ErrorCode::InvalidChecksum
    };
    ValidationError::with_code("dni", format!("invalid DNI/NIE: {e}"), code)
}

fn phone_error(field: &str, e: PhoneError) -> ValidationError {
    ValidationError::with_code(field, format!("invalid phone number: {e}"), ErrorCode::InvalidFormat)
}

fn iban_error(e: IbanError) -> ValidationError {
    let code = match e {
        IbanError::Checksum { .. } => ErrorCode::InvalidChecksum,
        _ => ErrorCode::InvalidFormat,
    };
    ValidationError::with_code("bank_account", format!("invalid Spanish IBAN: {e}"), code)
}
