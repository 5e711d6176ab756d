//! Provides a validated cardholder name.
//!
//! Runs of whitespace are collapsed to a single space. Only Latin letters
//! (accented ones included), spaces, apostrophes and hyphens are accepted.

use std::fmt;

use crate::utils::error_messages::FieldError;
use crate::utils::validation::{
    normalize_basic, ValidationResult, NAME_REGEX, WHITESPACE_RUN_REGEX,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardholderName {
    name: String,
}

impl CardholderName {
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let normalized = normalize_basic(raw);
        let collapsed = WHITESPACE_RUN_REGEX.replace_all(&normalized, " ");
        let name = collapsed.trim();

        if !NAME_REGEX.is_match(name) {
            return Err(FieldError::InvalidNameFormat);
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for CardholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AsRef<str> for CardholderName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Validates the name on the card and returns it with whitespace collapsed.
pub fn validate_name_on_card(raw: &str) -> ValidationResult {
    CardholderName::new(raw).map(CardholderName::into_string)
}
