//! The validation dispatcher.
//!
//! Routes each submitted field to the validator registered for its kind.
//! Kinds without a validator pass through untouched, so the engine never
//! blocks a submission it does not understand.

use crate::models::{FieldConfig, FieldKind, FieldSubmission, ValidationResult};
use crate::validators::{AddressValidator, FieldValidator, PhoneValidator};
use std::collections::HashMap;
use tracing::debug;

/// Dispatches field submissions to per-kind validators.
///
/// # Example
///
/// ```
/// use formguard::engine::ValidationEngine;
/// use formguard::models::{FieldConfig, FieldKind, FieldSubmission};
/// use formguard::validators::PhoneFormatSpec;
///
/// let engine = ValidationEngine::new();
/// let config = FieldConfig::Phone {
///     required: true,
///     format: PhoneFormatSpec::International,
/// };
/// let result = engine.validate(
///     FieldKind::Phone,
///     &FieldSubmission::new("+14155552671"),
///     &config,
/// );
/// assert!(result.is_valid);
/// assert_eq!(result.normalized_value.as_deref(), Some("+14155552671"));
/// ```
pub struct ValidationEngine {
    validators: HashMap<FieldKind, Box<dyn FieldValidator>>,
}

impl ValidationEngine {
    /// Build the engine with the standard validators registered and no
    /// engine-wide default country.
    pub fn new() -> Self {
        Self::with_default_country(None)
    }

    /// Build the engine from configuration, applying its default country.
    pub fn from_config(config: &crate::Config) -> Self {
        Self::with_default_country(config.default_country)
    }

    fn with_default_country(default_country: Option<crate::CountryCode>) -> Self {
        let mut validators: HashMap<FieldKind, Box<dyn FieldValidator>> = HashMap::new();
        validators.insert(
            FieldKind::Address,
            Box::new(AddressValidator::new(default_country)),
        );
        validators.insert(
            FieldKind::Phone,
            Box::new(PhoneValidator::new(default_country)),
        );
        Self { validators }
    }

    /// Register (or replace) the validator for a field kind.
    pub fn register(&mut self, kind: FieldKind, validator: Box<dyn FieldValidator>) {
        self.validators.insert(kind, validator);
    }

    /// Validate one submitted field.
    ///
    /// Field kinds without a registered validator pass through valid; the
    /// engine never errors on a kind it does not recognize.
    pub fn validate(
        &self,
        kind: FieldKind,
        submission: &FieldSubmission,
        config: &FieldConfig,
    ) -> ValidationResult {
        match self.validators.get(&kind) {
            Some(validator) => {
                let result = validator.validate(submission, config);
                debug!(kind = ?kind, is_valid = result.is_valid, "validated field");
                result
            }
            None => ValidationResult::pass(),
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
