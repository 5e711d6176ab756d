//! Validation and normalization of a payment form.
//!
//! Five fields are checked independently (card number, expiration date, CVV,
//! cardholder name, billing email) and the results are merged by
//! [`PaymentValidator`] into a map of clean values and a map of errors.

pub mod clock;
pub mod config;
pub mod consts;
pub mod form;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ChecksumPolicy, ConfigError, CvvRule, Locale, ValidationConfig};
pub use form::{validate_payment_form, FormInput, FormReport, FormResult, PaymentValidator};
pub use utils::error_messages::{Field, FieldError};
pub use utils::validation::*;
