//! Represents all possible errors reported for a payment form, and their
//! rendering into user-facing messages.
//!
//! Validation logic only ever produces a [`FieldError`]. Turning it into text is
//! a separate step driven by a [`Locale`], so the wording can change without
//! touching the validators.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five fields of the payment form, declared in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CardNumber,
    ExpDate,
    Cvv,
    NameOnCard,
    BillingEmail,
}

impl Field {
    /// Every field, in the order the orchestrator validates them.
    pub const ALL: [Field; 5] = [
        Field::CardNumber,
        Field::ExpDate,
        Field::Cvv,
        Field::NameOnCard,
        Field::BillingEmail,
    ];

    /// Key used in the `errors` map.
    pub fn error_key(self) -> &'static str {
        match self {
            Field::CardNumber => "card_number",
            Field::ExpDate => "exp_date",
            Field::Cvv => "cvv",
            Field::NameOnCard => "name_on_card",
            Field::BillingEmail => "billing_email",
        }
    }

    /// Key used in the `clean` map. The CVV never appears there.
    pub fn clean_key(self) -> Option<&'static str> {
        match self {
            Field::CardNumber => Some("card"),
            Field::ExpDate => Some("exp_date"),
            Field::Cvv => None,
            Field::NameOnCard => Some("name_on_card"),
            Field::BillingEmail => Some("billing_email"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_key())
    }
}

/// Why a single field was rejected.
///
/// `Display` yields the Spanish message shown to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Número de tarjeta inválido: debe contener solo dígitos y tener entre 13 y 19 caracteres.")]
    InvalidCardFormat,
    #[error("Número de tarjeta inválido: la suma de verificación no es válida.")]
    CardChecksumMismatch,
    #[error("Fecha de expiración inválida: formato debe ser MM/YY y mes entre 01 y 12.")]
    InvalidExpirationFormat,
    #[error("La tarjeta ha expirado.")]
    CardExpired,
    #[error("Fecha de expiración demasiado lejana.")]
    ExpirationTooFarInFuture,
    #[error("CVV inválido: debe contener solo dígitos y tener 3 o 4 caracteres.")]
    InvalidCvvFormat,
    #[error("Nombre en la tarjeta inválido: debe tener entre 2 y 60 caracteres y solo contener letras, espacios, apóstrofes o guiones.")]
    InvalidNameFormat,
    #[error("Correo electrónico inválido: debe tener máximo 254 caracteres.")]
    InvalidEmailTooLong,
    #[error("Correo electrónico inválido: formato incorrecto.")]
    InvalidEmailFormat,
}

impl FieldError {
    /// The field this error is reported under.
    pub fn field(self) -> Field {
        match self {
            FieldError::InvalidCardFormat | FieldError::CardChecksumMismatch => Field::CardNumber,
            FieldError::InvalidExpirationFormat
            | FieldError::CardExpired
            | FieldError::ExpirationTooFarInFuture => Field::ExpDate,
            FieldError::InvalidCvvFormat => Field::Cvv,
            FieldError::InvalidNameFormat => Field::NameOnCard,
            FieldError::InvalidEmailTooLong | FieldError::InvalidEmailFormat => Field::BillingEmail,
        }
    }
}

/// Language used to render a [`FieldError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn render(self, error: &FieldError) -> String {
        match self {
            Locale::Es => error.to_string(),
            Locale::En => english(error).to_owned(),
        }
    }
}

fn english(error: &FieldError) -> &'static str {
    match error {
        FieldError::InvalidCardFormat => {
            "invalid card number: must contain only digits and be between 13 and 19 characters."
        }
        FieldError::CardChecksumMismatch => "invalid card number: checksum verification failed.",
        FieldError::InvalidExpirationFormat => {
            "invalid expiration date: format must be MM/YY with month between 01 and 12."
        }
        FieldError::CardExpired => "the card has expired.",
        FieldError::ExpirationTooFarInFuture => "expiration date is too far in the future.",
        FieldError::InvalidCvvFormat => {
            "invalid CVV: must contain only digits and be 3 or 4 characters long."
        }
        FieldError::InvalidNameFormat => {
            "invalid name on card: must be between 2 and 60 characters and contain only letters, spaces, apostrophes, or hyphens."
        }
        FieldError::InvalidEmailTooLong => "invalid email: must be at most 254 characters.",
        FieldError::InvalidEmailFormat => "invalid email: incorrect format.",
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(other.to_owned()),
        }
    }
}
