//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like country
//! codes and E.164 phone numbers. These value objects provide validation at
//! construction time and prevent invalid data from being represented in the
//! system.

pub mod country;
pub mod errors;
pub mod phone;

pub use country::CountryCode;
pub use errors::ValidationError;
pub use phone::{E164Number, E164_PATTERN};
