use super::types::{ClientForm, MaritalStatus};

/// Builder for client forms.
///
/// ```
/// use ibercheck::client::*;
///
/// let form = ClientFormBuilder::new("Lucía", "García Pérez", "12345678Z")
///     .address("Calle Mayor 1", "28013", "Madrid", "Madrid")
///     .email("lucia@example.com")
///     .phone("666123456")
///     .marital_status(MaritalStatus::MarriedCommunity)
///     .bank_account("ES79 2100 0813 6101 2345 6789")
///     .build();
/// assert!(validate_client_form(&form).is_empty());
/// ```
pub struct ClientFormBuilder {
    form: ClientForm,
}

impl ClientFormBuilder {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dni: impl Into<String>,
    ) -> Self {
        Self {
            form: ClientForm {
                first_name: first_name.into(),
                last_name: last_name.into(),
                dni: dni.into(),
                ..ClientForm::default()
            },
        }
    }

    pub fn address(
        mut self,
        address: impl Into<String>,
        postal_code: impl Into<String>,
        municipality: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        self.form.address = address.into();
        self.form.postal_code = postal_code.into();
        self.form.municipality = municipality.into();
        self.form.province = province.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.form.email_1 = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.form.phone_1 = phone.into();
        self
    }

    pub fn second_phone(mut self, phone: impl Into<String>) -> Self {
        self.form.phone_2 = Some(phone.into());
        self
    }

    pub fn marital_status(mut self, status: MaritalStatus) -> Self {
        self.form.marital_status = Some(status);
        self
    }

    pub fn bank_account(mut self, iban: impl Into<String>) -> Self {
        self.form.bank_account = iban.into();
        self
    }

    pub fn observations(mut self, text: impl Into<String>) -> Self {
        self.form.observations = Some(text.into());
        self
    }

    pub fn build(self) -> ClientForm {
        self.form
    }
}
