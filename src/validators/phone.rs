//! Phone number validation and E.164 normalization.
//!
//! The canonical mode parses numbers with the `phonenumber` crate: regional
//! formats parse with the resolved country as the default region,
//! international formats carry their own calling code. Host-defined formats
//! may instead supply a fixed pattern, which matches without normalizing.
//!
//! The parse → validity → format pipeline runs identically for every
//! submission, so the same predicate can back a client-side mirror without
//! drifting from the server's answer.

use crate::domain::{CountryCode, E164Number, E164_PATTERN};
use crate::models::{FieldConfig, FieldSubmission, ValidationFailure, ValidationResult};
use crate::validators::FieldValidator;
use phonenumber::{country, Mode};
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// How a phone field instance validates its value. Exactly one spec is
/// active per field instance.
#[derive(Debug, Clone)]
pub enum PhoneFormatSpec {
    /// Parse with the field's country context as the default region;
    /// accepts national notation like "07911 123456".
    Regional,

    /// The number carries its own country calling code; parse with no
    /// region hint.
    International,

    /// Fixed pattern match with a format-specific instruction message.
    /// No normalization is performed.
    Pattern {
        pattern: Regex,
        instruction: String,
    },
}

/// A named phone format as presented to the host's form configuration.
#[derive(Debug, Clone)]
pub struct PhoneFormat {
    /// Label shown in the host's format selector.
    pub label: String,

    /// The validation behavior for fields using this format.
    pub spec: PhoneFormatSpec,
}

/// Registry of named phone formats.
///
/// Hosts extend the built-ins with their own named formats via
/// [`PhoneFormats::register`].
#[derive(Debug, Clone, Default)]
pub struct PhoneFormats {
    formats: HashMap<String, PhoneFormat>,
}

impl PhoneFormats {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry pre-populated with the built-in formats:
    /// `uk`, `international-selector`, and `e164`.
    pub fn builtin() -> Self {
        let mut formats = Self::new();
        formats.register(
            "uk",
            PhoneFormat {
                label: "UK".to_string(),
                spec: PhoneFormatSpec::Regional,
            },
        );
        formats.register(
            "international-selector",
            PhoneFormat {
                label: "International (with country code)".to_string(),
                spec: PhoneFormatSpec::International,
            },
        );
        formats.register(
            "e164",
            PhoneFormat {
                label: "E.164".to_string(),
                spec: PhoneFormatSpec::Pattern {
                    // Panic is unreachable: the pattern is a tested constant.
                    pattern: Regex::new(E164_PATTERN)
                        .unwrap_or_else(|e| panic!("invalid E.164 pattern: {}", e)),
                    instruction:
                        "Please enter a valid international phone number with country code"
                            .to_string(),
                },
            },
        );
        formats
    }

    /// Register (or replace) a named format.
    pub fn register(&mut self, name: impl Into<String>, format: PhoneFormat) {
        self.formats.insert(name.into(), format);
    }

    /// Look up a format by name.
    pub fn get(&self, name: &str) -> Option<&PhoneFormat> {
        self.formats.get(name)
    }
}

/// Validate a phone number against the active format spec.
///
/// On success in a parser mode, the result carries the number normalized to
/// E.164; the caller stores that in place of the raw input.
pub fn validate_phone(
    value: &str,
    spec: &PhoneFormatSpec,
    country_hint: Option<&CountryCode>,
    required: bool,
) -> ValidationResult {
    if value.is_empty() {
        if required {
            return ValidationResult::fail(ValidationFailure::EmptyRequiredValue("Phone number"));
        }
        return ValidationResult::pass();
    }

    match spec {
        PhoneFormatSpec::Pattern {
            pattern,
            instruction,
        } => {
            if pattern.is_match(value) {
                ValidationResult::pass()
            } else {
                ValidationResult::fail(ValidationFailure::FormatMismatch(instruction.clone()))
            }
        }
        PhoneFormatSpec::Regional | PhoneFormatSpec::International => {
            let region = match spec {
                PhoneFormatSpec::International => None,
                _ => country_hint.and_then(|code| code.as_str().parse::<country::Id>().ok()),
            };
            parse_and_normalize(value, region)
        }
    }
}

fn parse_and_normalize(value: &str, region: Option<country::Id>) -> ValidationResult {
    let number = match phonenumber::parse(region, value) {
        Ok(number) => number,
        Err(e) => {
            debug!(value, error = %e, "phone number failed to parse");
            return ValidationResult::fail(ValidationFailure::UnparseableNumber);
        }
    };

    if !phonenumber::is_valid(&number) {
        debug!(value, "phone number parsed but is not allocable");
        return ValidationResult::fail(ValidationFailure::InvalidNumber);
    }

    let formatted = number.format().mode(Mode::E164).to_string();
    match E164Number::new(formatted) {
        Ok(normalized) => ValidationResult::pass_normalized(normalized.into_inner()),
        Err(_) => ValidationResult::fail(ValidationFailure::InvalidNumber),
    }
}

/// Validator for phone fields.
///
/// The country hint for regional formats comes from the sibling country
/// input when present, otherwise from the engine-wide default.
#[derive(Debug, Default)]
pub struct PhoneValidator {
    /// Engine-wide fallback country, from [`crate::Config`].
    pub default_country: Option<CountryCode>,
}

impl PhoneValidator {
    pub fn new(default_country: Option<CountryCode>) -> Self {
        Self { default_country }
    }
}

impl FieldValidator for PhoneValidator {
    fn validate(&self, submission: &FieldSubmission, config: &FieldConfig) -> ValidationResult {
        let FieldConfig::Phone { required, format } = config else {
            // Mismatched configuration never blocks a submission.
            return ValidationResult::pass();
        };

        let country_hint =
            crate::resolver::resolve(submission.country(), self.default_country.as_ref());
        validate_phone(&submission.value, format, country_hint.as_ref(), *required)
    }
}
