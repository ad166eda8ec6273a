//! E164Number value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The E.164 shape: `+`, a non-zero leading digit, at most 15 digits total.
///
/// This is the single pass/fail predicate shared by the server-side validator
/// and any client-side mirror; it depends on no server-only state.
pub const E164_PATTERN: &str = r"^\+[1-9]\d{1,14}$";

static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(E164_PATTERN).unwrap_or_else(|e| panic!("invalid E.164 pattern: {}", e))
});

/// A phone number in canonical E.164 form.
///
/// This ensures numbers are validated at construction time, so a stored
/// `E164Number` is always in the canonical format.
///
/// # Example
///
/// ```
/// use formguard::domain::E164Number;
///
/// let number = E164Number::new("+447911123456").unwrap();
/// assert_eq!(number.as_str(), "+447911123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct E164Number(String);

impl E164Number {
    /// Create a new E164Number, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidE164` if the input does not match
    /// [`E164_PATTERN`].
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        let number = number.into();

        if !Self::is_valid(&number) {
            return Err(ValidationError::InvalidE164(number));
        }

        Ok(Self(number))
    }

    /// Check whether a string matches the E.164 shape.
    pub fn is_valid(number: &str) -> bool {
        E164_REGEX.is_match(number)
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for E164Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for E164Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        E164Number::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for E164Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
