//! Root module for the validation system.
//! Exposes the public API for payment field validation.

mod constants;
mod luhn;
mod normalize;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use luhn::luhn_is_valid;
pub use normalize::normalize_basic;
pub use types::{
    validate_billing_email, validate_card_number, validate_cvv, validate_exp_date,
    validate_name_on_card, BillingEmail, CardNumber, CardholderName, ExpirationDate,
};

use crate::utils::error_messages::FieldError;

/// Outcome of a single field validator: the cleaned value, or why it was rejected.
pub type ValidationResult<T = String> = Result<T, FieldError>;
