//! Postcode validation for address field groups.
//!
//! Each supported country maps to one anchored pattern. Countries without a
//! pattern get a presence check only: unknown countries are fail-open, known
//! countries with an unmatched pattern fail closed.

use crate::domain::CountryCode;
use crate::models::{FieldConfig, FieldSubmission, ValidationFailure, ValidationResult};
use crate::resolver;
use crate::validators::FieldValidator;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Per-country postcode patterns, anchored at both ends.
static POSTCODE_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    [
        // US ZIP codes: 12345 or 12345-6789
        ("US", r"^\d{5}(-\d{4})?$"),
        // UK postcodes including the special GIR 0AA case
        (
            "GB",
            r"(?i)^(GIR 0AA|(([A-Z][0-9]{1,2})|([A-Z][A-HJ-Y][0-9]{1,2})|([A-Z][0-9][A-Z])|([A-Z][A-HJ-Y][0-9]?[A-Z])) [0-9][A-Z]{2})$",
        ),
        // Canadian postcodes: A1A 1A1, optional space or hyphen
        (
            "CA",
            r"(?i)^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z][ -]?\d[ABCEGHJ-NPRSTV-Z]\d$",
        ),
        // Australian postcodes: 4 digits
        ("AU", r"^\d{4}$"),
        // Finnish postcodes: 5 digits
        ("FI", r"^\d{5}$"),
        // Hungarian postcodes: 4 digits
        ("HU", r"^\d{4}$"),
    ]
    .into_iter()
    .map(|(code, pattern)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid postcode pattern for {}: {}", code, e));
        (code, regex)
    })
    .collect()
});

fn pattern_for(country: &CountryCode) -> Option<&'static Regex> {
    POSTCODE_PATTERNS.get(country.as_str())
}

/// Validate a postcode against its country's pattern.
///
/// `country_label` is the name used in the failure message; callers pass the
/// raw submitted country value when available so the message echoes what the
/// user selected.
pub fn validate_postcode(
    value: &str,
    country: Option<&CountryCode>,
    country_label: Option<&str>,
    required: bool,
) -> ValidationResult {
    if value.is_empty() {
        if required {
            return ValidationResult::fail(ValidationFailure::EmptyRequiredValue("Postcode"));
        }
        // Optional and empty: the pattern never applies.
        return ValidationResult::pass();
    }

    if let Some(code) = country {
        if let Some(pattern) = pattern_for(code) {
            if !pattern.is_match(value) {
                let label = country_label
                    .map(str::to_string)
                    .or_else(|| resolver::display_name(code).map(str::to_string))
                    .unwrap_or_else(|| code.to_string());
                debug!(country = %code, postcode = value, "postcode failed country pattern");
                return ValidationResult::fail(ValidationFailure::PostcodeMismatch(label));
            }
        }
    }

    ValidationResult::pass()
}

/// Validator for address field groups.
///
/// Reads the postcode and country sub-inputs from the submission, resolves
/// the country context, and applies [`validate_postcode`]. Country
/// resolution prefers the submitted value, then the field's configured
/// default, then the engine-wide default.
#[derive(Debug, Default)]
pub struct AddressValidator {
    /// Engine-wide fallback country, from [`crate::Config`].
    pub default_country: Option<CountryCode>,
}

impl AddressValidator {
    pub fn new(default_country: Option<CountryCode>) -> Self {
        Self { default_country }
    }
}

impl FieldValidator for AddressValidator {
    fn validate(&self, submission: &FieldSubmission, config: &FieldConfig) -> ValidationResult {
        let FieldConfig::Address {
            required,
            default_country,
        } = config
        else {
            // Mismatched configuration never blocks a submission.
            return ValidationResult::pass();
        };

        let postcode = submission.postcode().unwrap_or("");
        let submitted_country = submission.country().map(str::trim).filter(|s| !s.is_empty());
        let fallback = default_country.as_ref().or(self.default_country.as_ref());
        let country = resolver::resolve(submitted_country, fallback);

        validate_postcode(postcode, country.as_ref(), submitted_country, *required)
    }
}
