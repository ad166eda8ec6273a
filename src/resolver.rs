//! Country context resolution for address and phone fields.
//!
//! The host's country selector submits free-text country names ("United
//! Kingdom") or, for some address types, alpha-2 codes. This module maps
//! either form to a [`CountryCode`], falling back to a configured default
//! when the sibling input is empty or unrecognized.
//!
//! Resolution never fails: absence of country context resolves to `None`,
//! and downstream validators skip their country-specific checks.

use crate::domain::CountryCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

/// Country selector entries: canonical display name, alpha-2 code.
///
/// Mirrors the host selector's country list. Lookup is case-insensitive on
/// the name; codes are also accepted directly.
const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Belgium", "BE"),
    ("Brazil", "BR"),
    ("Bulgaria", "BG"),
    ("Canada", "CA"),
    ("Chile", "CL"),
    ("China", "CN"),
    ("Colombia", "CO"),
    ("Croatia", "HR"),
    ("Czech Republic", "CZ"),
    ("Denmark", "DK"),
    ("Egypt", "EG"),
    ("Estonia", "EE"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Greece", "GR"),
    ("Hong Kong", "HK"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("India", "IN"),
    ("Indonesia", "ID"),
    ("Ireland", "IE"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Malaysia", "MY"),
    ("Mexico", "MX"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Nigeria", "NG"),
    ("Norway", "NO"),
    ("Philippines", "PH"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Romania", "RO"),
    ("Saudi Arabia", "SA"),
    ("Singapore", "SG"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Thailand", "TH"),
    ("Turkey", "TR"),
    ("Ukraine", "UA"),
    ("United Arab Emirates", "AE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("Vietnam", "VN"),
];

static NAME_TO_CODE: Lazy<HashMap<String, CountryCode>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .filter_map(|(name, code)| {
            CountryCode::new(code)
                .ok()
                .map(|c| (name.to_lowercase(), c))
        })
        .collect()
});

static CODE_TO_NAME: Lazy<HashMap<CountryCode, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .filter_map(|(name, code)| CountryCode::new(code).ok().map(|c| (c, *name)))
        .collect()
});

/// Look up the alpha-2 code for a free-text country value.
///
/// Accepts a country name (exact match, case-insensitive) or a bare alpha-2
/// code. Returns `None` for anything unrecognized.
pub fn code_for(value: &str) -> Option<CountryCode> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(code) = NAME_TO_CODE.get(&value.to_lowercase()) {
        return Some(*code);
    }

    // A bare code is accepted only if it names a known country.
    CountryCode::new(value)
        .ok()
        .filter(|code| CODE_TO_NAME.contains_key(code))
}

/// Canonical display name for a country code, if known.
pub fn display_name(code: &CountryCode) -> Option<&'static str> {
    CODE_TO_NAME.get(code).copied()
}

/// Resolve the country context for a field.
///
/// Prefers the sibling country input's submitted value; falls back to the
/// field group's configured default only when nothing was submitted. An
/// unrecognized submitted value resolves to `None` so country-specific
/// checks are skipped rather than applied against the wrong country.
pub fn resolve(
    submitted: Option<&str>,
    default_country: Option<&CountryCode>,
) -> Option<CountryCode> {
    let resolved = match submitted.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => code_for(value),
        None => default_country.copied(),
    };

    trace!(submitted = ?submitted, resolved = ?resolved, "resolved country context");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).unwrap()
    }

    #[test]
    fn test_resolves_country_names() {
        assert_eq!(code_for("United Kingdom"), Some(code("GB")));
        assert_eq!(code_for("United States"), Some(code("US")));
        assert_eq!(code_for("Finland"), Some(code("FI")));
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(code_for("united kingdom"), Some(code("GB")));
        assert_eq!(code_for("HUNGARY"), Some(code("HU")));
    }

    #[test]
    fn test_accepts_bare_codes() {
        assert_eq!(code_for("gb"), Some(code("GB")));
        assert_eq!(code_for("CA"), Some(code("CA")));
    }

    #[test]
    fn test_unknown_values_do_not_resolve() {
        assert_eq!(code_for("Atlantis"), None);
        assert_eq!(code_for("ZZ"), None);
        assert_eq!(code_for(""), None);
    }

    #[test]
    fn test_submitted_value_wins_over_default() {
        let default = code("GB");
        assert_eq!(
            resolve(Some("Canada"), Some(&default)),
            Some(code("CA"))
        );
    }

    #[test]
    fn test_falls_back_to_default_when_nothing_submitted() {
        let default = code("GB");
        assert_eq!(resolve(None, Some(&default)), Some(code("GB")));
        assert_eq!(resolve(Some(""), Some(&default)), Some(code("GB")));
        assert_eq!(resolve(Some("  "), Some(&default)), Some(code("GB")));
    }

    #[test]
    fn test_unrecognized_submission_skips_the_default() {
        // A country we know nothing about must not inherit the default's
        // rules; unknown countries are fail-open.
        let default = code("GB");
        assert_eq!(resolve(Some("Atlantis"), Some(&default)), None);
    }

    #[test]
    fn test_no_context_resolves_to_none() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some("nowhere"), None), None);
    }

    #[test]
    fn test_display_name_round_trip() {
        assert_eq!(display_name(&code("GB")), Some("United Kingdom"));
        assert_eq!(display_name(&code("ZZ")), None);
    }
}
