//! Provides a validated `MM/YY` expiration date.
//!
//! Years are compared as two-digit numbers with no century windowing: `05`
//! checked in 2095 counts as expired, not as 2105, and `99` checked in 2030
//! is too far ahead rather than 1999.

use chrono::Datelike;
use std::fmt;

use crate::clock::Clock;
use crate::utils::error_messages::FieldError;
use crate::utils::validation::{
    normalize_basic, ValidationResult, EXP_DATE_REGEX, MAX_EXPIRATION_YEARS_AHEAD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpirationDate {
    // Field order gives chronological ordering.
    year: u32,
    month: u32,
}

impl ExpirationDate {
    /// Checks the `MM/YY` format only, without looking at the current date.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let normalized = normalize_basic(raw);
        if !EXP_DATE_REGEX.is_match(&normalized) {
            return Err(FieldError::InvalidExpirationFormat);
        }

        let (month, year) = normalized
            .split_once('/')
            .ok_or(FieldError::InvalidExpirationFormat)?;
        let month = month
            .parse::<u32>()
            .map_err(|_| FieldError::InvalidExpirationFormat)?;
        let year = year
            .parse::<u32>()
            .map_err(|_| FieldError::InvalidExpirationFormat)?;

        Ok(Self { year, month })
    }

    /// Parses the date and rejects it if already expired or too far ahead of
    /// the clock's current month.
    pub fn new<C: Clock + ?Sized>(raw: &str, clock: &C) -> ValidationResult<Self> {
        let date = Self::parse(raw)?;
        date.check_window(clock)?;
        Ok(date)
    }

    fn check_window<C: Clock + ?Sized>(&self, clock: &C) -> ValidationResult<()> {
        let today = clock.today();
        let current_year = today.year().rem_euclid(100) as u32;
        let current_month = today.month();

        if self.year < current_year || (self.year == current_year && self.month < current_month) {
            return Err(FieldError::CardExpired);
        }
        if self.year > current_year + MAX_EXPIRATION_YEARS_AHEAD {
            return Err(FieldError::ExpirationTooFarInFuture);
        }
        Ok(())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Two-digit year.
    pub fn year(&self) -> u32 {
        self.year
    }
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Validates an expiration date and returns it as the normalized `MM/YY` text.
pub fn validate_exp_date<C: Clock + ?Sized>(raw: &str, clock: &C) -> ValidationResult {
    ExpirationDate::new(raw, clock).map(|date| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn june_2025() -> FixedClock {
        FixedClock::from_year_month(2025, 6).unwrap()
    }

    #[test]
    fn test_valid_dates() {
        let valid_cases = vec!["12/25", "06/25", " 01/30 ", "12/40", "０７/２６"];

        for raw in valid_cases {
            assert!(
                validate_exp_date(raw, &june_2025()).is_ok(),
                "Valid date {} was rejected !",
                raw
            );
        }
    }

    #[test]
    fn test_valid_date_is_returned_normalized() {
        assert_eq!(validate_exp_date("  12/25 ", &june_2025()), Ok("12/25".to_string()));
        assert_eq!(validate_exp_date("０７/２６", &june_2025()), Ok("07/26".to_string()));
    }

    #[test]
    fn test_invalid_format() {
        let invalid_cases = vec![
            "", "00/25", "13/25", "1229", "1/25", "12/2025", "12-25", "ab/cd", "12/25x",
        ];

        for raw in invalid_cases {
            assert_eq!(
                validate_exp_date(raw, &june_2025()),
                Err(FieldError::InvalidExpirationFormat),
                "Invalid date {} was accepted !",
                raw
            );
        }
    }

    #[test]
    fn test_expired_dates() {
        let expired_cases = vec!["05/25", "12/24", "01/00"];

        for raw in expired_cases {
            assert_eq!(
                validate_exp_date(raw, &june_2025()),
                Err(FieldError::CardExpired),
                "Expired date {} was accepted !",
                raw
            );
        }
    }

    #[test]
    fn test_too_far_in_future() {
        assert_eq!(
            validate_exp_date("01/41", &june_2025()),
            Err(FieldError::ExpirationTooFarInFuture)
        );
    }

    #[test]
    fn test_no_century_windowing() {
        let clock = FixedClock::from_year_month(2030, 1).unwrap();
        assert_eq!(
            validate_exp_date("12/99", &clock),
            Err(FieldError::ExpirationTooFarInFuture)
        );
        assert_eq!(validate_exp_date("12/14", &clock), Err(FieldError::CardExpired));

        // Late in the century, next-century dates wrap to the past
        let clock = FixedClock::from_year_month(2095, 1).unwrap();
        assert_eq!(validate_exp_date("12/05", &clock), Err(FieldError::CardExpired));
        assert_eq!(validate_exp_date("12/99", &clock), Ok("12/99".to_string()));
    }

    #[test]
    fn test_format_is_checked_without_clock() {
        let date = ExpirationDate::parse("03/19").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.year(), 19);
        assert_eq!(date.to_string(), "03/19");
    }
}
