//! Configuration management for the validation engine and update checker.
//!
//! This module handles loading and validating configuration from environment
//! variables, loading a `.env` file when present.

use crate::domain::CountryCode;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default feed URL polled for release metadata.
pub const DEFAULT_UPDATE_FEED_URL: &str =
    "https://raw.githubusercontent.com/formguard/formguard/main/info.json";

/// Configuration for the validation engine and update checker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Country applied when a field group carries no country context
    /// (default: GB; set `FORMGUARD_DEFAULT_COUNTRY` empty to disable)
    pub default_country: Option<CountryCode>,

    /// URL of the release-metadata feed
    pub update_feed_url: String,

    /// How long a fetched release document stays fresh, in hours (default: 6)
    pub update_cache_ttl_hours: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FORMGUARD_DEFAULT_COUNTRY`: alpha-2 default country (default: GB;
    ///   empty disables the default)
    /// - `FORMGUARD_UPDATE_FEED_URL`: release feed URL (default: the
    ///   project feed)
    /// - `FORMGUARD_UPDATE_CACHE_TTL_HOURS`: feed cache TTL (default: 6)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_country = match env::var("FORMGUARD_DEFAULT_COUNTRY") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(CountryCode::new(&value).map_err(|e| {
                ConfigError::InvalidValue {
                    var: "FORMGUARD_DEFAULT_COUNTRY".to_string(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => CountryCode::new("GB").ok(),
        };

        let update_feed_url = env::var("FORMGUARD_UPDATE_FEED_URL")
            .unwrap_or_else(|_| DEFAULT_UPDATE_FEED_URL.to_string());

        // Validate feed URL format
        if !update_feed_url.starts_with("http://") && !update_feed_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "FORMGUARD_UPDATE_FEED_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let update_cache_ttl_hours = Self::parse_env_u64("FORMGUARD_UPDATE_CACHE_TTL_HOURS", 6)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            default_country,
            update_feed_url,
            update_cache_ttl_hours,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}
