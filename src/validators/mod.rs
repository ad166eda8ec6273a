//! Field validators, one implementation per field kind.
//!
//! Each field kind gets one [`FieldValidator`] implementation, registered
//! with the engine at construction.

use crate::models::{FieldConfig, FieldSubmission, ValidationResult};

pub mod address;
pub mod phone;

pub use address::{validate_postcode, AddressValidator};
pub use phone::{validate_phone, PhoneFormat, PhoneFormatSpec, PhoneFormats, PhoneValidator};

/// A validator for one field kind.
///
/// Implementations are pure and synchronous: the result is a function of
/// the submission and configuration alone, with no shared mutable state,
/// so a call is safe per-request without locking.
pub trait FieldValidator: Send + Sync {
    /// Validate one submitted field.
    ///
    /// Must tolerate a configuration that does not match the validator's
    /// kind by passing the submission through unchanged.
    fn validate(&self, submission: &FieldSubmission, config: &FieldConfig) -> ValidationResult;
}
