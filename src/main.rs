//! Demo entry point.
//! Loads the configuration, then validates either the built-in sample forms or
//! the forms read from a JSON file given as first argument.

mod demo;

use anyhow::{anyhow, Context, Result};
use dotenv::dotenv;
use log::{info, warn};
use payment_validation::consts::TODAY_ENV;
use payment_validation::{Clock, FixedClock, FormInput, PaymentValidator, SystemClock, ValidationConfig};
use std::{env, fs, process::ExitCode};

fn main() -> ExitCode {
    // Charger les variables d'environnement
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let config = ValidationConfig::from_env().context("Failed to load validation config")?;
    info!(
        "Validating with locale {:?}, checksum {:?}, CVV rule {:?}",
        config.locale, config.checksum, config.cvv_rule
    );

    let pinned = fixed_clock()?;
    if let Some(clock) = &pinned {
        info!("Clock pinned to {}", clock.today());
    }

    match (env::args().nth(1), pinned) {
        (Some(path), Some(clock)) => validate_file(&PaymentValidator::with_clock(config, clock), &path),
        (Some(path), None) => validate_file(&PaymentValidator::with_clock(config, SystemClock), &path),
        (None, pinned) => {
            // The sample dates are only meaningful relative to their own month
            let clock = match pinned {
                Some(clock) => clock,
                None => demo::sample_clock()?,
            };
            demo::run(&PaymentValidator::with_clock(config, clock))?;
            Ok(true)
        }
    }
}

/// Reads `PAYMENT_TODAY` as `YYYY-MM`.
fn fixed_clock() -> Result<Option<FixedClock>> {
    let Ok(value) = env::var(TODAY_ENV) else {
        return Ok(None);
    };

    let (year, month) = value
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("{} must be YYYY-MM, got {:?}", TODAY_ENV, value))?;
    let year = year.parse::<i32>().with_context(|| format!("Invalid year in {}", TODAY_ENV))?;
    let month = month.parse::<u32>().with_context(|| format!("Invalid month in {}", TODAY_ENV))?;

    FixedClock::from_year_month(year, month)
        .map(Some)
        .ok_or_else(|| anyhow!("{} is not a valid month: {:?}", TODAY_ENV, value))
}

/// Validates one form or an array of forms from a JSON file and prints the
/// results. Returns whether every form was valid.
fn validate_file<C: Clock>(validator: &PaymentValidator<C>, path: &str) -> Result<bool> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))?;

    let parsed = if value.is_array() {
        serde_json::from_value::<Vec<FormInput>>(value)
    } else {
        serde_json::from_value::<FormInput>(value).map(|form| vec![form])
    };
    let forms = parsed.context("JSON does not describe payment forms")?;

    info!("Validating {} form(s) from {}", forms.len(), path);

    let mut all_valid = true;
    for (index, form) in forms.iter().enumerate() {
        let result = validator.validate_and_render(form);
        if !result.is_valid() {
            // Field names only, never values
            warn!(
                "Form {} rejected on: {}",
                index,
                result.errors.keys().copied().collect::<Vec<_>>().join(", ")
            );
            all_valid = false;
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(all_valid)
}
