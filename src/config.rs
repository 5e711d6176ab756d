//! Runtime configuration of the validators.
//!
//! Field rules themselves are fixed; only the message language and two
//! compatibility switches can be chosen, through environment variables.

use log::debug;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::consts::{CHECKSUM_ENV, CVV_RULE_ENV, LOCALE_ENV};

pub use crate::utils::error_messages::Locale;

/// What the card number validator does with the Luhn checksum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// The checksum is never consulted.
    #[default]
    Ignore,
    /// A structurally valid number failing the checksum is rejected.
    Reject,
}

impl FromStr for ChecksumPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(ChecksumPolicy::Ignore),
            "reject" => Ok(ChecksumPolicy::Reject),
            other => Err(other.to_owned()),
        }
    }
}

/// How strictly the CVV pattern is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CvvRule {
    /// Exactly 3 or 4 digits.
    #[default]
    Strict,
    /// Only the first 3 or 4 characters must be digits; anything may follow.
    LegacyPrefix,
}

impl FromStr for CvvRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CvvRule::Strict),
            "legacy-prefix" | "legacy_prefix" => Ok(CvvRule::LegacyPrefix),
            other => Err(other.to_owned()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {variable}")]
    InvalidValue { variable: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub locale: Locale,
    pub checksum: ChecksumPolicy,
    pub cvv_rule: CvvRule,
}

impl ValidationConfig {
    /// Builds the configuration from the process environment. Unset variables
    /// keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            locale: parse_var(&lookup, LOCALE_ENV)?.unwrap_or_default(),
            checksum: parse_var(&lookup, CHECKSUM_ENV)?.unwrap_or_default(),
            cvv_rule: parse_var(&lookup, CVV_RULE_ENV)?.unwrap_or_default(),
        };
        debug!("Loaded validation config: {:?}", config);
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, variable: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { variable, value }),
    }
}
