//! CVV validation.
//!
//! The CVV is sensitive: it is checked but never kept, so there is no
//! validated type holding it.

use crate::config::CvvRule;
use crate::utils::error_messages::FieldError;
use crate::utils::validation::{normalize_basic, ValidationResult, CVV_PREFIX_REGEX, CVV_REGEX};

/// Checks that the CVV is 3 or 4 digits. Nothing is returned on success.
pub fn validate_cvv(raw: &str, rule: CvvRule) -> ValidationResult<()> {
    let cvv = normalize_basic(raw);
    let pattern = match rule {
        CvvRule::Strict => &*CVV_REGEX,
        CvvRule::LegacyPrefix => &*CVV_PREFIX_REGEX,
    };

    if pattern.is_match(&cvv) {
        Ok(())
    } else {
        Err(FieldError::InvalidCvvFormat)
    }
}
