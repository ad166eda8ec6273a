//! Validation outcome types shared by all field validators.

use serde::Serialize;
use std::fmt;

/// The ways a field value can fail validation.
///
/// Every failure is recoverable: it resolves to a [`ValidationResult`] with
/// a human-readable message, never a raised error. The host decides how to
/// surface the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A required field was submitted empty. Carries the field noun used in
    /// the message ("Postcode", "Phone number").
    EmptyRequiredValue(&'static str),

    /// A postcode did not match the pattern for its country. Carries the
    /// country name shown in the message.
    PostcodeMismatch(String),

    /// A value did not match a fixed-pattern phone format. Carries the
    /// format's instruction text.
    FormatMismatch(String),

    /// A phone number could not be parsed at all.
    UnparseableNumber,

    /// A phone number parsed but is not an allocable number.
    InvalidNumber,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRequiredValue(noun) => write!(f, "{} cannot be empty.", noun),
            Self::PostcodeMismatch(country) => {
                write!(f, "Please enter a valid postcode/zip for the {}.", country)
            }
            Self::FormatMismatch(instruction) => write!(f, "{}", instruction),
            Self::UnparseableNumber => {
                write!(f, "Please enter a valid phone number with correct country code.")
            }
            Self::InvalidNumber => write!(f, "Please enter a valid phone number."),
        }
    }
}

/// The structured outcome of validating one field.
///
/// Invariants, enforced by the constructors:
/// - `is_valid == false` implies `message` is set and non-empty.
/// - When validation normalizes the value (phone → E.164),
///   `normalized_value` carries the canonical form the host must store in
///   place of the raw input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether the submitted value passed validation.
    pub is_valid: bool,

    /// Canonical replacement for the raw input, when normalization applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_value: Option<String>,

    /// Human-readable failure message; always present when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no normalization.
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            normalized_value: None,
            message: None,
        }
    }

    /// A passing result carrying a normalized replacement value.
    pub fn pass_normalized(normalized: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            normalized_value: Some(normalized.into()),
            message: None,
        }
    }

    /// A failing result; the message comes from the failure itself.
    pub fn fail(failure: ValidationFailure) -> Self {
        Self {
            is_valid: false,
            normalized_value: None,
            message: Some(failure.to_string()),
        }
    }
}
