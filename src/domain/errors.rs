//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided country code is not two ASCII letters.
    InvalidCountryCode(String),

    /// The provided phone number is not in E.164 form.
    InvalidE164(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCountryCode(code) => write!(f, "Invalid country code: {}", code),
            Self::InvalidE164(number) => write!(f, "Not an E.164 phone number: {}", number),
        }
    }
}

impl std::error::Error for ValidationError {}
