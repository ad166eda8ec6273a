//! Formguard - a country-aware field validation engine for form submissions.
//!
//! This library validates postal codes against per-country patterns,
//! validates and normalizes phone numbers to E.164, and dispatches submitted
//! fields to the right validator by field kind. A self-update checker polls
//! a release-metadata feed behind a TTL cache.
//!
//! # Architecture
//!
//! - **domain**: type-safe value objects (country codes, E.164 numbers)
//! - **models**: field configuration, submissions, and validation results
//! - **resolver**: country context resolution from sibling form inputs
//! - **validators**: per-kind validators (address/postcode, phone)
//! - **engine**: the validation dispatcher
//! - **update**: release-feed polling with a cached fetch
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod cache;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod resolver;
pub mod update;
pub mod validators;

pub use cache::TimedCache;
pub use config::Config;
pub use domain::{CountryCode, E164Number};
pub use engine::ValidationEngine;
pub use error::{ConfigError, UpdateError};
pub use models::{
    FieldConfig, FieldKind, FieldSubmission, ReleaseInfo, ValidationFailure, ValidationResult,
};
pub use update::UpdateChecker;
pub use validators::{
    validate_phone, validate_postcode, AddressValidator, FieldValidator, PhoneFormat,
    PhoneFormatSpec, PhoneFormats, PhoneValidator,
};
