//! Self-update checker.
//!
//! Polls the project's release-metadata feed (a static `info.json`) and
//! reports when a newer version is published. Fetches go through a TTL
//! cache so repeated checks within the window perform no HTTP request.

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{UpdateError, UpdateResult};
use crate::models::ReleaseInfo;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The version of this crate, compared against the feed's version.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Checks the release feed for a newer published version.
#[derive(Clone)]
pub struct UpdateChecker {
    /// URL of the release-metadata feed
    feed_url: String,

    /// Version the running installation reports
    current_version: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Cached feed document
    cache: TimedCache<ReleaseInfo>,
}

impl UpdateChecker {
    /// Create a new UpdateChecker from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            feed_url: config.update_feed_url.clone(),
            current_version: CURRENT_VERSION.to_string(),
            agent: Arc::new(agent),
            cache: TimedCache::new(Duration::from_secs(config.update_cache_ttl_hours * 3600)),
        }
    }

    /// Create an UpdateChecker with explicit settings (useful for testing).
    #[doc(hidden)]
    pub fn with_feed_url(
        feed_url: String,
        current_version: String,
        cache_ttl: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            feed_url,
            current_version,
            agent: Arc::new(agent),
            cache: TimedCache::new(cache_ttl),
        }
    }

    /// The latest published release, from cache when fresh.
    pub fn release_info(&self) -> UpdateResult<ReleaseInfo> {
        if let Some(cached) = self.cache.get() {
            debug!("release feed served from cache");
            return Ok(cached);
        }

        let info = self.fetch()?;
        self.cache.store(info.clone());
        Ok(info)
    }

    /// The latest release if it is newer than the running version.
    pub fn available_update(&self) -> UpdateResult<Option<ReleaseInfo>> {
        let info = self.release_info()?;

        if version_newer(&info.version, &self.current_version) {
            info!(
                current = %self.current_version,
                available = %info.version,
                "update available"
            );
            Ok(Some(info))
        } else {
            Ok(None)
        }
    }

    fn fetch(&self) -> UpdateResult<ReleaseInfo> {
        debug!("GET {}", self.feed_url);

        let response = self.agent.get(&self.feed_url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => UpdateError::FeedError { status },
            other => UpdateError::HttpError(other.to_string()),
        })?;

        response
            .into_json::<ReleaseInfo>()
            .map_err(|e| UpdateError::JsonError(e.to_string()))
    }
}

/// Compare dotted numeric versions: is `candidate` newer than `current`?
///
/// Missing segments count as zero ("1.0" == "1.0.0"); non-numeric segments
/// count as zero rather than failing.
fn version_newer(candidate: &str, current: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.trim()
            .split('.')
            .map(|segment| segment.parse::<u64>().unwrap_or(0))
            .collect()
    };

    let candidate = parse(candidate);
    let current = parse(current);
    let len = candidate.len().max(current.len());

    for i in 0..len {
        let a = candidate.get(i).copied().unwrap_or(0);
        let b = current.get(i).copied().unwrap_or(0);
        if a != b {
            return a > b;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_newer_basic() {
        assert!(version_newer("1.0.2", "1.0.1"));
        assert!(version_newer("2.0.0", "1.9.9"));
        assert!(!version_newer("1.0.1", "1.0.1"));
        assert!(!version_newer("1.0.0", "1.0.1"));
    }

    #[test]
    fn test_version_newer_uneven_lengths() {
        assert!(version_newer("1.0.1", "1.0"));
        assert!(!version_newer("1.0", "1.0.0"));
        assert!(!version_newer("1", "1.0.0"));
        assert!(version_newer("1.1", "1.0.9"));
    }

    #[test]
    fn test_version_newer_tolerates_garbage() {
        assert!(!version_newer("not.a.version", "1.0.0"));
        assert!(version_newer("1.0.1", "one.zero"));
    }
}
