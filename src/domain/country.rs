//! CountryCode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe ISO 3166-1 alpha-2 country code.
///
/// Construction validates the shape (exactly two ASCII letters) and
/// normalizes to uppercase. Codes outside the validators' rule tables are
/// legal values; they simply carry no country-specific rules.
///
/// # Example
///
/// ```
/// use formguard::domain::CountryCode;
///
/// let code = CountryCode::new("gb").unwrap();
/// assert_eq!(code.as_str(), "GB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Create a new CountryCode, validating and uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCountryCode` unless the input is
    /// exactly two ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim();
        let bytes = code.as_bytes();

        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ValidationError::InvalidCountryCode(code.to_string()));
        }

        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }

    /// Get the code as a two-character string slice.
    pub fn as_str(&self) -> &str {
        // Invariant: both bytes are ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

// Serde support - serialize as string
impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CountryCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_uppercases() {
        let code = CountryCode::new("gb").unwrap();
        assert_eq!(code.as_str(), "GB");
    }

    #[test]
    fn test_country_code_trims_whitespace() {
        let code = CountryCode::new(" us ").unwrap();
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn test_country_code_validates_shape() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("G").is_err());
        assert!(CountryCode::new("GBR").is_err());
        assert!(CountryCode::new("G1").is_err());
        assert!(CountryCode::new("CA").is_ok());
    }

    #[test]
    fn test_unknown_code_is_still_a_valid_value() {
        // Not in any rule table, but shape-valid.
        assert!(CountryCode::new("ZZ").is_ok());
    }

    #[test]
    fn test_country_code_serialization() {
        let code = CountryCode::new("FI").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"FI\"");
    }

    #[test]
    fn test_country_code_deserialization_invalid_fails() {
        let result: Result<CountryCode, _> = serde_json::from_str("\"Finland\"");
        assert!(result.is_err());
    }
}
