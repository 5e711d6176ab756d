//! Constants used throughout the validation system

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of digits in a card number
pub const MIN_CARD_DIGITS: usize = 13;
/// Maximum number of digits in a card number
pub const MAX_CARD_DIGITS: usize = 19;
/// How many years ahead an expiration date may lie
pub const MAX_EXPIRATION_YEARS_AHEAD: u32 = 15;
/// Maximum length of a billing email, in characters
pub const MAX_EMAIL_LENGTH: usize = 254;

pub(crate) static CARD_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{},{}}}$", MIN_CARD_DIGITS, MAX_CARD_DIGITS))
        .expect("Failed to compile card number regex")
});

pub(crate) static EXP_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("Failed to compile expiration date regex")
});

pub(crate) static CVV_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3,4}$").expect("Failed to compile CVV regex")
});

// Start-anchored only: accepts "12345" and "123abc".
pub(crate) static CVV_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3,4}").expect("Failed to compile CVV prefix regex")
});

pub(crate) static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s'\-]{2,60}$").expect("Failed to compile name regex")
});

pub(crate) static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\x1C-\x1F]+").expect("Failed to compile whitespace regex")
});

pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});
