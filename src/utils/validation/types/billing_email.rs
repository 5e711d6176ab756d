//! Represents a validated billing email address.
//!
//! This is a structural check (local part, `@`, dotted domain, alphabetic TLD),
//! not full address grammar nor a deliverability test.

use std::fmt;

use crate::utils::error_messages::FieldError;
use crate::utils::validation::{normalize_basic, ValidationResult, EMAIL_REGEX, MAX_EMAIL_LENGTH};

/// A lowercased email address that passed the structural check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillingEmail {
    email: String,
}

impl BillingEmail {
    /// Creates a new `BillingEmail` after normalizing and lowercasing the input.
    ///
    /// # Example
    /// ```
    /// use payment_validation::BillingEmail;
    ///
    /// let email = BillingEmail::new("  John@Example.COM ").unwrap();
    /// assert_eq!(email.as_str(), "john@example.com");
    /// assert!(BillingEmail::new("test@").is_err());
    /// ```
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let email = normalize_basic(raw).to_lowercase();

        // Check maximum length before the format
        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(FieldError::InvalidEmailTooLong);
        }

        if !EMAIL_REGEX.is_match(&email) {
            return Err(FieldError::InvalidEmailFormat);
        }

        Ok(Self { email })
    }

    pub fn as_str(&self) -> &str {
        &self.email
    }

    pub fn into_string(self) -> String {
        self.email
    }
}

impl fmt::Display for BillingEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for BillingEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

/// Validates a billing email and returns it lowercased and trimmed.
pub fn validate_billing_email(raw: &str) -> ValidationResult {
    BillingEmail::new(raw).map(BillingEmail::into_string)
}
