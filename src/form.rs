//! Validation of a whole payment form.
//!
//! Every field is validated, whatever happened to the previous ones, so the
//! caller gets the complete list of problems in one pass.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::clock::{Clock, SystemClock};
use crate::config::{Locale, ValidationConfig};
use crate::utils::error_messages::{Field, FieldError};
use crate::utils::validation::{
    validate_cvv, BillingEmail, CardNumber, CardholderName, ExpirationDate, ValidationResult,
};

/// Raw, unvalidated form fields. Missing fields are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub card_number: Option<String>,
    pub exp_date: Option<String>,
    pub cvv: Option<String>,
    pub name_on_card: Option<String>,
    pub billing_email: Option<String>,
}

impl FormInput {
    pub fn new(
        card_number: &str,
        exp_date: &str,
        cvv: &str,
        name_on_card: &str,
        billing_email: &str,
    ) -> Self {
        Self {
            card_number: Some(card_number.to_owned()),
            exp_date: Some(exp_date.to_owned()),
            cvv: Some(cvv.to_owned()),
            name_on_card: Some(name_on_card.to_owned()),
            billing_email: Some(billing_email.to_owned()),
        }
    }

    fn get(&self, field: Field) -> &str {
        let value = match field {
            Field::CardNumber => &self.card_number,
            Field::ExpDate => &self.exp_date,
            Field::Cvv => &self.cvv,
            Field::NameOnCard => &self.name_on_card,
            Field::BillingEmail => &self.billing_email,
        };
        value.as_deref().unwrap_or_default()
    }
}

/// Typed outcome of a form validation, before messages are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Clean value per field. Rejected fields hold an empty string; the CVV is
    /// never present.
    pub clean: BTreeMap<Field, String>,
    pub errors: BTreeMap<Field, FieldError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, field: Field, result: ValidationResult) {
        match result {
            Ok(value) => {
                self.clean.insert(field, value);
            }
            Err(error) => {
                self.clean.insert(field, String::new());
                self.reject(error);
            }
        }
    }

    fn reject(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    /// Turns the report into string maps, with messages in the given locale.
    pub fn render(&self, locale: Locale) -> FormResult {
        let clean = self
            .clean
            .iter()
            .filter_map(|(field, value)| field.clean_key().map(|key| (key, value.clone())))
            .collect();
        let errors = self
            .errors
            .iter()
            .map(|(field, error)| (field.error_key(), locale.render(error)))
            .collect();

        FormResult { clean, errors }
    }
}

/// Rendered result: clean values and error messages keyed by field name.
///
/// Both maps serialize in validation order (card first, email last).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormResult {
    #[serde(serialize_with = "in_field_order")]
    pub clean: BTreeMap<&'static str, String>,
    #[serde(serialize_with = "in_field_order")]
    pub errors: BTreeMap<&'static str, String>,
}

fn in_field_order<S>(map: &BTreeMap<&'static str, String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut entries = serializer.serialize_map(Some(map.len()))?;
    for field in Field::ALL {
        let key = match field.clean_key() {
            Some(key) if map.contains_key(key) => key,
            _ => field.error_key(),
        };
        if let Some(value) = map.get(key) {
            entries.serialize_entry(key, value)?;
        }
    }
    entries.end()
}

impl FormResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates payment forms with a fixed configuration and clock.
#[derive(Debug, Clone, Default)]
pub struct PaymentValidator<C = SystemClock> {
    config: ValidationConfig,
    clock: C,
}

impl PaymentValidator<SystemClock> {
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PaymentValidator<C> {
    pub fn with_clock(config: ValidationConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Runs the five validators in order: card, expiration, CVV, name, email.
    pub fn validate(&self, input: &FormInput) -> FormReport {
        let mut report = FormReport::default();

        report.record(
            Field::CardNumber,
            CardNumber::new(input.get(Field::CardNumber), self.config.checksum)
                .map(CardNumber::into_string),
        );
        report.record(
            Field::ExpDate,
            ExpirationDate::new(input.get(Field::ExpDate), &self.clock).map(|d| d.to_string()),
        );
        if let Err(error) = validate_cvv(input.get(Field::Cvv), self.config.cvv_rule) {
            report.reject(error);
        }
        report.record(
            Field::NameOnCard,
            CardholderName::new(input.get(Field::NameOnCard)).map(CardholderName::into_string),
        );
        report.record(
            Field::BillingEmail,
            BillingEmail::new(input.get(Field::BillingEmail)).map(BillingEmail::into_string),
        );

        report
    }

    /// Validates and renders messages in the configured locale.
    pub fn validate_and_render(&self, input: &FormInput) -> FormResult {
        self.validate(input).render(self.config.locale)
    }
}

/// Validates a payment form with the default configuration and the system clock.
pub fn validate_payment_form(
    card_number: &str,
    exp_date: &str,
    cvv: &str,
    name_on_card: &str,
    billing_email: &str,
) -> FormResult {
    let input = FormInput::new(card_number, exp_date, cvv, name_on_card, billing_email);
    PaymentValidator::new(ValidationConfig::default()).validate_and_render(&input)
}
