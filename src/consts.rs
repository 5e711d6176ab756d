//! Global constants for the application: environment variable names read by
//! the configuration layer.

pub const LOCALE_ENV: &str = "PAYMENT_LOCALE"; // Langue des messages d'erreur (es|en).
pub const CHECKSUM_ENV: &str = "PAYMENT_LUHN"; // Politique Luhn (ignore|reject).
pub const CVV_RULE_ENV: &str = "PAYMENT_CVV_RULE"; // Règle CVV (strict|legacy-prefix).
pub const TODAY_ENV: &str = "PAYMENT_TODAY"; // Date fixe YYYY-MM pour le binaire de démo.
