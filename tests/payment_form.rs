use payment_validation::{
    validate_payment_form, CvvRule, FixedClock, FormInput, Locale, PaymentValidator,
    ValidationConfig,
};

const CARD: &str = "4111111111111111";
const EXP: &str = "12/25";
const CVV: &str = "123";
const NAME: &str = "John Doe";
const EMAIL: &str = "john@example.com";

fn validator() -> PaymentValidator<FixedClock> {
    PaymentValidator::with_clock(
        ValidationConfig::default(),
        FixedClock::from_year_month(2025, 6).unwrap(),
    )
}

fn check(input: FormInput) -> payment_validation::FormResult {
    validator().validate_and_render(&input)
}

#[test]
fn test_clean_map_always_has_four_keys() {
    let forms = vec![
        FormInput::new(CARD, EXP, CVV, NAME, EMAIL),
        FormInput::new("", "", "", "", ""),
        FormInput::default(),
        FormInput::new("123456", "1229", "12", "J0hn Doe", "@example.com"),
    ];

    for form in forms {
        let result = check(form.clone());
        let keys: Vec<_> = result.clean.keys().copied().collect();
        assert_eq!(
            keys,
            vec!["billing_email", "card", "exp_date", "name_on_card"],
            "Unexpected clean keys for {:?}",
            form
        );
    }
}

#[test]
fn test_sample_forms() {
    // (card, exp, cvv, name, email, failing field)
    let cases = vec![
        ("4111 1111 1111 1111", EXP, CVV, NAME, EMAIL, None),
        ("123456", EXP, CVV, NAME, EMAIL, Some("card_number")),
        ("4111-1111-1111-111A", EXP, CVV, NAME, EMAIL, Some("card_number")),
        (CARD, "00/25", CVV, NAME, EMAIL, Some("exp_date")),
        (CARD, "13/25", CVV, NAME, EMAIL, Some("exp_date")),
        (CARD, "1229", CVV, NAME, EMAIL, Some("exp_date")),
        (CARD, "12/41", CVV, NAME, EMAIL, Some("exp_date")),
        (CARD, EXP, "12", NAME, EMAIL, Some("cvv")),
        (CARD, EXP, "12345", NAME, EMAIL, Some("cvv")),
        (CARD, EXP, CVV, NAME, "test@", Some("billing_email")),
        (CARD, EXP, CVV, NAME, "@example.com", Some("billing_email")),
        (CARD, EXP, CVV, "J0hn Doe", EMAIL, Some("name_on_card")),
        (CARD, EXP, CVV, "A", EMAIL, Some("name_on_card")),
        ("5500000000000004", "12/29", CVV, "Anne-Marie O'Connor", "anne.marie@example.com", None),
        (CARD, EXP, "1234", "Juan Pérez", "juan@example.com", None),
    ];

    for (card, exp, cvv, name, email, failing) in cases {
        let result = check(FormInput::new(card, exp, cvv, name, email));
        let keys: Vec<_> = result.errors.keys().copied().collect();
        let expected: Vec<_> = failing.into_iter().collect();
        assert_eq!(
            keys, expected,
            "Unexpected errors for ({}, {}, {}, {}, {})",
            card, exp, cvv, name, email
        );

        if let Some(field) = failing {
            let clean_key = if field == "card_number" { "card" } else { field };
            if let Some(value) = result.clean.get(clean_key) {
                assert!(value.is_empty(), "Rejected {} was echoed back", field);
            }
        }
    }
}

#[test]
fn test_spanish_messages_are_preserved() {
    let result = check(FormInput::new("123456", "05/25", "12", "A", "x@y"));

    assert_eq!(
        result.errors["card_number"],
        "Número de tarjeta inválido: debe contener solo dígitos y tener entre 13 y 19 caracteres."
    );
    assert_eq!(result.errors["exp_date"], "La tarjeta ha expirado.");
    assert_eq!(
        result.errors["name_on_card"],
        "Nombre en la tarjeta inválido: debe tener entre 2 y 60 caracteres y solo contener letras, espacios, apóstrofes o guiones."
    );
    assert_eq!(
        result.errors["billing_email"],
        "Correo electrónico inválido: formato incorrecto."
    );
}

#[test]
fn test_english_messages() {
    let config = ValidationConfig {
        locale: Locale::En,
        ..ValidationConfig::default()
    };
    let validator =
        PaymentValidator::with_clock(config, FixedClock::from_year_month(2025, 6).unwrap());
    let result = validator.validate_and_render(&FormInput::new(CARD, "01/41", CVV, NAME, EMAIL));

    assert_eq!(
        result.errors["exp_date"],
        "expiration date is too far in the future."
    );
}

#[test]
fn test_legacy_cvv_rule_accepts_long_values() {
    let config = ValidationConfig {
        cvv_rule: CvvRule::LegacyPrefix,
        ..ValidationConfig::default()
    };
    let validator =
        PaymentValidator::with_clock(config, FixedClock::from_year_month(2025, 6).unwrap());
    let result = validator.validate_and_render(&FormInput::new(CARD, EXP, "12345", NAME, EMAIL));

    assert!(result.is_valid(), "Unexpected errors: {:?}", result.errors);
}

#[test]
fn test_clean_values_validate_again_unchanged() {
    let first = check(FormInput::new(
        " 4111-1111 1111-1111 ",
        " 12/25 ",
        CVV,
        "  Juan    Pérez ",
        " Juan@Example.COM ",
    ));
    assert!(first.is_valid());

    let second = check(FormInput::new(
        &first.clean["card"],
        &first.clean["exp_date"],
        CVV,
        &first.clean["name_on_card"],
        &first.clean["billing_email"],
    ));

    assert!(second.is_valid());
    assert_eq!(first.clean, second.clean);
}

#[test]
fn test_convenience_function_uses_wall_clock() {
    let result = validate_payment_form(CARD, "1299", CVV, NAME, EMAIL);
    assert!(result.errors.contains_key("exp_date"));

    let result = validate_payment_form(CARD, "12/00", CVV, NAME, EMAIL);
    assert!(result.errors.contains_key("exp_date"));
    assert_eq!(result.clean["card"], CARD);
    assert!(!result.errors.contains_key("cvv"));
}
