//! Release metadata published by the update feed.

use serde::{Deserialize, Serialize};

/// Release information deserialized from the feed's `info.json`.
///
/// The feed is a static JSON document in the project repository; only
/// `version` is required, descriptive fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// Dotted release version, e.g. "1.2.0".
    pub version: String,

    /// Short description of the release.
    #[serde(default)]
    pub description: String,

    /// Changelog text (markdown; rendering is the host's concern).
    #[serde(default)]
    pub changelog: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_document() {
        let info: ReleaseInfo = serde_json::from_str(
            r#"{"version":"1.2.0","description":"Fixes","changelog":"- fixed things"}"#,
        )
        .unwrap();
        assert_eq!(info.version, "1.2.0");
        assert_eq!(info.description, "Fixes");
        assert_eq!(info.changelog, "- fixed things");
    }

    #[test]
    fn test_descriptive_fields_default_to_empty() {
        let info: ReleaseInfo = serde_json::from_str(r#"{"version":"1.0.2"}"#).unwrap();
        assert_eq!(info.version, "1.0.2");
        assert!(info.description.is_empty());
        assert!(info.changelog.is_empty());
    }

    #[test]
    fn test_missing_version_is_an_error() {
        let result: Result<ReleaseInfo, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }
}
