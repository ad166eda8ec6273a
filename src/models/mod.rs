//! Data structures at the engine's boundaries.
//!
//! - **field**: field kinds, per-kind configuration, and submitted values
//! - **result**: validation outcomes and the failure taxonomy
//! - **release**: update-feed release metadata

pub mod field;
pub mod release;
pub mod result;

pub use field::{
    FieldConfig, FieldKind, FieldSubmission, COUNTRY_SUB_INPUT, POSTCODE_SUB_INPUT,
};
pub use release::ReleaseInfo;
pub use result::{ValidationFailure, ValidationResult};
