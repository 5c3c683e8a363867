//! A TTL-aware cache of contribution snapshots on top of a [`Store`].
//!
//! Entries are stored as JSON envelopes `{ "data": ..., "timestamp": <epoch ms> }`
//! under the key `<prefix>_<username>`.

use super::{ContributionsSnapshot, Store};
use crate::Result;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "     cache";

/// Prefix of every cache key.
pub const CACHE_KEY_PREFIX: &str = "github_contributions_cache";

/// How long a cached snapshot stays fresh unless configured otherwise.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Result of loading an entry from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    /// Cached data was found and is still fresh.
    Data(T),

    /// No usable cache entry exists (miss, expired, corrupt, store failure, or reads are ignored).
    Miss,
}

/// Persisted representation of a cache entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct Envelope<T> {
    data: T,

    /// Capture instant in milliseconds since the Unix epoch.
    timestamp: i64,
}

/// A TTL-aware snapshot cache keyed by username.
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
    ttl: Duration,
    ignore: bool,
}

impl<S: Store> Cache<S> {
    /// Create a new cache.
    ///
    /// When `ignore_cached` is set, reads always miss but fresh results are still written.
    #[must_use]
    pub const fn new(store: S, ttl: Duration, ignore_cached: bool) -> Self {
        Self {
            store,
            ttl,
            ignore: ignore_cached,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the time-to-live of entries.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The storage key for a username.
    #[must_use]
    pub fn key_for(username: &str) -> String {
        format!("{CACHE_KEY_PREFIX}_{username}")
    }

    /// Load the cached snapshot for `username` as of `now`.
    ///
    /// An expired entry is removed from the store before reporting a miss.
    #[must_use]
    pub fn load(&self, username: &str, now: DateTime<Utc>) -> CacheResult<ContributionsSnapshot> {
        if self.ignore {
            return CacheResult::Miss;
        }

        let key = Self::key_for(username);

        let text = match self.store.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::debug!(target: LOG_TARGET, "Cache miss for {key}");
                return CacheResult::Miss;
            }
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Cache miss for {key}, store read failed: {e:#}");
                return CacheResult::Miss;
            }
        };

        let envelope: Envelope<ContributionsSnapshot> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Cache miss for {key}, entry is unreadable: {e:#}");
                return CacheResult::Miss;
            }
        };

        let age_ms = now.timestamp_millis().saturating_sub(envelope.timestamp);
        if age_ms < 0 {
            log::debug!(target: LOG_TARGET, "Cache timestamp is in the future for {key} (clock skew detected), treating as fresh");
            return CacheResult::Data(envelope.data);
        }

        let age = Duration::from_millis(age_ms.unsigned_abs());
        if age >= self.ttl {
            log::debug!(
                target: LOG_TARGET,
                "Cache expired for {key} (age: {:.1} minutes, TTL: {:.1} minutes)",
                age.as_secs_f64() / 60.0,
                self.ttl.as_secs_f64() / 60.0
            );

            if let Err(e) = self.store.remove(&key) {
                log::debug!(target: LOG_TARGET, "Could not evict expired entry {key}: {e:#}");
            }

            return CacheResult::Miss;
        }

        log::debug!(target: LOG_TARGET, "Cache hit for {key} (age: {:.1} minutes)", age.as_secs_f64() / 60.0);
        CacheResult::Data(envelope.data)
    }

    /// Save a snapshot for `username`, replacing any previous entry.
    pub fn save(&self, username: &str, snapshot: &ContributionsSnapshot, now: DateTime<Utc>) -> Result<()> {
        let key = Self::key_for(username);
        let envelope = Envelope {
            data: snapshot,
            timestamp: now.timestamp_millis(),
        };

        #[cfg(debug_assertions)]
        let text = serde_json::to_string_pretty(&envelope);
        #[cfg(not(debug_assertions))]
        let text = serde_json::to_string(&envelope);

        let text = text.into_app_err_with(|| format!("serializing cache entry '{key}'"))?;
        self.store.set(&key, &text)?;

        log::debug!(target: LOG_TARGET, "Cached snapshot for {key}");
        Ok(())
    }
}
