//! Caching implementations.

mod timed_cache;

pub use timed_cache::TimedCache;
