//! Field configuration and submission types at the host boundary.

use crate::domain::CountryCode;
use crate::validators::phone::PhoneFormatSpec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Conventional sub-input index of the postcode within an address group.
pub const POSTCODE_SUB_INPUT: u8 = 5;

/// Conventional sub-input index of the country within an address group.
pub const COUNTRY_SUB_INPUT: u8 = 6;

/// The semantic kind of a form field, as declared by form configuration.
///
/// Kinds without a registered validator dispatch as no-ops; unknown kinds
/// deserialize to [`FieldKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// An address group with postcode and country sub-inputs.
    Address,

    /// A phone number input.
    Phone,

    /// Any other field kind; validation passes through.
    Other,
}

impl FieldKind {
    /// Map a declared kind name to a `FieldKind`; anything unrecognized
    /// is `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "address" => Self::Address,
            "phone" => Self::Phone,
            _ => Self::Other,
        }
    }

    /// The kind's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Other => "other",
        }
    }
}

// Serde support - serialize as the kind name
impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - unknown names deserialize to Other, never an error
impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FieldKind::from_name(&s))
    }
}

/// Kind-specific field configuration.
///
/// The kind discriminator and its payload travel together, so validators
/// never probe for properties that may not exist.
#[derive(Debug, Clone)]
pub enum FieldConfig {
    /// Configuration for an address group.
    Address {
        /// Whether the group's postcode must be present.
        required: bool,

        /// Country applied when the group has no country input (hidden or
        /// fixed by the address type).
        default_country: Option<CountryCode>,
    },

    /// Configuration for a phone field.
    Phone {
        /// Whether a phone number must be present.
        required: bool,

        /// The active format for this field instance.
        format: PhoneFormatSpec,
    },

    /// No validator-relevant configuration.
    Other,
}

impl FieldConfig {
    /// The field kind this configuration belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Address { .. } => FieldKind::Address,
            Self::Phone { .. } => FieldKind::Phone,
            Self::Other => FieldKind::Other,
        }
    }
}

/// The submitted state of one field: its primary value plus any sub-input
/// values belonging to the same logical group, keyed by conventional index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSubmission {
    /// The field's primary submitted value (the phone number for phone
    /// fields; unused for address groups).
    pub value: String,

    /// Sub-input values for grouped fields (postcode, country, ...).
    pub sub_inputs: BTreeMap<u8, String>,
}

impl FieldSubmission {
    /// A submission with only a primary value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            sub_inputs: BTreeMap::new(),
        }
    }

    /// Builder-style helper to attach a sub-input value.
    pub fn with_sub_input(mut self, index: u8, value: impl Into<String>) -> Self {
        self.sub_inputs.insert(index, value.into());
        self
    }

    /// The address group's postcode sub-input, if submitted.
    pub fn postcode(&self) -> Option<&str> {
        self.sub_inputs
            .get(&POSTCODE_SUB_INPUT)
            .map(String::as_str)
    }

    /// The address group's country sub-input, if submitted.
    pub fn country(&self) -> Option<&str> {
        self.sub_inputs.get(&COUNTRY_SUB_INPUT).map(String::as_str)
    }
}
