//! Sample forms shown when the binary runs without arguments.

use anyhow::{anyhow, Result};
use payment_validation::{Clock, FixedClock, FormInput, PaymentValidator};

const VALID_CARD: &str = "4111111111111111";
const VALID_EXP: &str = "12/25";
const VALID_CVV: &str = "123";
const VALID_NAME: &str = "John Doe";
const VALID_EMAIL: &str = "john@example.com";

/// Month the samples are checked against unless `PAYMENT_TODAY` is set.
pub fn sample_clock() -> Result<FixedClock> {
    FixedClock::from_year_month(2025, 6).ok_or_else(|| anyhow!("Invalid sample month"))
}

fn samples() -> Vec<(&'static str, FormInput)> {
    let base = |card: &str, exp: &str, cvv: &str, name: &str, email: &str| {
        FormInput::new(card, exp, cvv, name, email)
    };

    vec![
        ("Valid input", base("4111 1111 1111 1111", VALID_EXP, VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid card - too short", base("123456", VALID_EXP, VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid card - contains letters", base("4111-1111-1111-111A", VALID_EXP, VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid expiration - month 00", base(VALID_CARD, "00/25", VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid expiration - month 13", base(VALID_CARD, "13/25", VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid expiration - format without slash", base(VALID_CARD, "1229", VALID_CVV, VALID_NAME, VALID_EMAIL)),
        ("Invalid CVV - too short", base(VALID_CARD, VALID_EXP, "12", VALID_NAME, VALID_EMAIL)),
        ("Invalid CVV - too long", base(VALID_CARD, VALID_EXP, "12345", VALID_NAME, VALID_EMAIL)),
        ("Invalid email - missing domain", base(VALID_CARD, VALID_EXP, VALID_CVV, VALID_NAME, "test@")),
        ("Invalid email - missing local part", base(VALID_CARD, VALID_EXP, VALID_CVV, VALID_NAME, "@example.com")),
        ("Invalid name - contains number", base(VALID_CARD, VALID_EXP, VALID_CVV, "J0hn Doe", VALID_EMAIL)),
        ("Invalid name - too short", base(VALID_CARD, VALID_EXP, VALID_CVV, "A", VALID_EMAIL)),
        ("Valid card - Mastercard", base("5500000000000004", "12/29", VALID_CVV, "Anne-Marie O'Connor", "anne.marie@example.com")),
        ("Valid name - with accent", base(VALID_CARD, VALID_EXP, VALID_CVV, "Juan Pérez", "juan@example.com")),
    ]
}

pub fn run<C: Clock>(validator: &PaymentValidator<C>) -> Result<()> {
    for (number, (title, form)) in samples().into_iter().enumerate() {
        println!("\n--- Test {}: {} ---", number + 1, title);
        let result = validator.validate_and_render(&form);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
