//! Provides a validated card number representation.
//!
//! Human formatting (spaces and hyphens) is stripped before checking that the
//! number is made of 13 to 19 digits. Issuer prefixes are not checked.

use std::fmt;

use crate::config::ChecksumPolicy;
use crate::utils::error_messages::FieldError;
use crate::utils::validation::{
    luhn_is_valid, normalize_basic, ValidationResult, CARD_DIGITS_REGEX,
};

/// A card number made only of digits, with a valid length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardNumber {
    digits: String,
}

impl CardNumber {
    /// Normalizes and validates a raw card number.
    ///
    /// # Example
    /// ```
    /// use payment_validation::{ChecksumPolicy, CardNumber};
    ///
    /// let card = CardNumber::new("4111 1111-1111 1111", ChecksumPolicy::Ignore).unwrap();
    /// assert_eq!(card.as_str(), "4111111111111111");
    /// ```
    pub fn new(raw: &str, checksum: ChecksumPolicy) -> ValidationResult<Self> {
        let digits: String = normalize_basic(raw)
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if !CARD_DIGITS_REGEX.is_match(&digits) {
            return Err(FieldError::InvalidCardFormat);
        }

        if checksum == ChecksumPolicy::Reject && !luhn_is_valid(&digits) {
            return Err(FieldError::CardChecksumMismatch);
        }

        Ok(Self { digits })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn into_string(self) -> String {
        self.digits
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl AsRef<str> for CardNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

/// Validates a card number without the checksum and returns the bare digits.
pub fn validate_card_number(raw: &str) -> ValidationResult {
    CardNumber::new(raw, ChecksumPolicy::Ignore).map(CardNumber::into_string)
}
