//! End-to-end tests for address postcode validation.
//!
//! These drive the full path a host submission takes: engine dispatch,
//! country resolution from the sibling country input, and the per-country
//! pattern table.

use formguard::models::{COUNTRY_SUB_INPUT, POSTCODE_SUB_INPUT};
use formguard::{CountryCode, FieldConfig, FieldKind, FieldSubmission, ValidationEngine};

fn address_config(required: bool) -> FieldConfig {
    FieldConfig::Address {
        required,
        default_country: None,
    }
}

fn submission(postcode: &str, country: &str) -> FieldSubmission {
    FieldSubmission::new("")
        .with_sub_input(POSTCODE_SUB_INPUT, postcode)
        .with_sub_input(COUNTRY_SUB_INPUT, country)
}

#[test]
fn valid_postcodes_per_country() {
    let engine = ValidationEngine::new();
    let cases = [
        ("12345", "United States"),
        ("12345-6789", "United States"),
        ("SW1A 1AA", "United Kingdom"),
        ("GIR 0AA", "United Kingdom"),
        ("K1A 0B1", "Canada"),
        ("2000", "Australia"),
        ("00100", "Finland"),
        ("1051", "Hungary"),
    ];

    for (postcode, country) in cases {
        let result = engine.validate(
            FieldKind::Address,
            &submission(postcode, country),
            &address_config(true),
        );
        assert!(
            result.is_valid,
            "{} should be a valid postcode for {}",
            postcode, country
        );
    }
}

#[test]
fn invalid_postcodes_fail_with_country_named() {
    let engine = ValidationEngine::new();
    let cases = [
        ("1234", "United States"),
        ("12345", "United Kingdom"),
        ("12345", "Canada"),
        ("200", "Australia"),
        ("0010", "Finland"),
        ("10511", "Hungary"),
    ];

    for (postcode, country) in cases {
        let result = engine.validate(
            FieldKind::Address,
            &submission(postcode, country),
            &address_config(true),
        );
        assert!(!result.is_valid, "{} must fail for {}", postcode, country);
        let message = result.message.expect("failures carry a message");
        assert!(
            message.contains(country),
            "message {:?} should name {}",
            message,
            country
        );
    }
}

#[test]
fn spec_scenarios() {
    let engine = ValidationEngine::new();

    // SW1A 1AA for GB, required → valid
    let result = engine.validate(
        FieldKind::Address,
        &submission("SW1A 1AA", "United Kingdom"),
        &address_config(true),
    );
    assert!(result.is_valid);

    // 12345 for GB, required → invalid, names the country
    let result = engine.validate(
        FieldKind::Address,
        &submission("12345", "United Kingdom"),
        &address_config(true),
    );
    assert!(!result.is_valid);
    assert_eq!(
        result.message.as_deref(),
        Some("Please enter a valid postcode/zip for the United Kingdom.")
    );

    // Empty, US, not required → valid
    let result = engine.validate(
        FieldKind::Address,
        &submission("", "United States"),
        &address_config(false),
    );
    assert!(result.is_valid);

    // Empty, US, required → invalid, "cannot be empty"
    let result = engine.validate(
        FieldKind::Address,
        &submission("", "United States"),
        &address_config(true),
    );
    assert!(!result.is_valid);
    assert_eq!(result.message.as_deref(), Some("Postcode cannot be empty."));
}

#[test]
fn countries_without_rules_are_presence_only() {
    let engine = ValidationEngine::new();

    for value in ["75008", "anything", "x"] {
        let result = engine.validate(
            FieldKind::Address,
            &submission(value, "France"),
            &address_config(true),
        );
        assert!(
            result.is_valid,
            "{} should pass for a country with no rule",
            value
        );
    }
}

#[test]
fn unknown_country_names_skip_the_pattern_check() {
    let engine = ValidationEngine::new();

    let result = engine.validate(
        FieldKind::Address,
        &submission("not-a-postcode", "Ruritania"),
        &address_config(true),
    );
    assert!(result.is_valid);
}

#[test]
fn hidden_country_input_falls_back_to_configured_default() {
    let engine = ValidationEngine::new();
    let config = FieldConfig::Address {
        required: true,
        default_country: CountryCode::new("FI").ok(),
    };

    let no_country = FieldSubmission::new("").with_sub_input(POSTCODE_SUB_INPUT, "00100");
    assert!(engine.validate(FieldKind::Address, &no_country, &config).is_valid);

    let bad = FieldSubmission::new("").with_sub_input(POSTCODE_SUB_INPUT, "123");
    let result = engine.validate(FieldKind::Address, &bad, &config);
    assert!(!result.is_valid);
    assert_eq!(
        result.message.as_deref(),
        Some("Please enter a valid postcode/zip for the Finland.")
    );
}

#[test]
fn country_codes_accepted_in_place_of_names() {
    let engine = ValidationEngine::new();

    let result = engine.validate(
        FieldKind::Address,
        &submission("99999", "GB"),
        &address_config(true),
    );
    assert!(!result.is_valid);
    // With only a code submitted, the message echoes what the user sent.
    assert_eq!(
        result.message.as_deref(),
        Some("Please enter a valid postcode/zip for the GB.")
    );
}
