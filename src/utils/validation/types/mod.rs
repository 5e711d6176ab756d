//! Type definitions for the validation system

mod billing_email;
mod card_number;
mod cvv;
mod exp_date;
mod name_on_card;

// Re-export commonly used types and functions
pub use billing_email::{validate_billing_email, BillingEmail};
pub use card_number::{validate_card_number, CardNumber};
pub use cvv::validate_cvv;
pub use exp_date::{validate_exp_date, ExpirationDate};
pub use name_on_card::{validate_name_on_card, CardholderName};
