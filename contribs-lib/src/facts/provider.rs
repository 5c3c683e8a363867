use super::cache::{Cache, CacheResult};
use super::{Client, ContributionsSnapshot, Store, parse_calendar, synthesize};
use crate::Result;
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};

const LOG_TARGET: &str = "  provider";

/// Where a snapshot returned by [`Provider`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// A fresh cache entry.
    Cache,

    /// A successful fetch and parse of the live calendar.
    Network,

    /// Synthetic sample data produced because acquisition failed.
    Fallback,
}

impl Display for Provenance {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Cache => "cache",
            Self::Network => "network",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Produces contribution snapshots: cache lookup, fetch, parse, cache store.
#[derive(Debug)]
pub struct Provider<S> {
    client: Client,
    cache: Cache<S>,
}

impl<S: Store> Provider<S> {
    #[must_use]
    pub const fn new(client: Client, cache: Cache<S>) -> Self {
        Self { client, cache }
    }

    #[must_use]
    pub const fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    /// Get the contribution snapshot for `username`.
    ///
    /// This never fails. When the calendar cannot be fetched or parsed, a synthetic
    /// snapshot is returned instead and nothing is cached.
    pub async fn get_contributions(&self, username: &str, now: DateTime<Utc>) -> ContributionsSnapshot {
        self.get_contributions_with_provenance(username, now).await.1
    }

    /// Like [`Self::get_contributions`], also reporting where the snapshot came from.
    pub async fn get_contributions_with_provenance(&self, username: &str, now: DateTime<Utc>) -> (Provenance, ContributionsSnapshot) {
        if let CacheResult::Data(snapshot) = self.cache.load(username, now) {
            log::debug!(target: LOG_TARGET, "Using cached contributions for '{username}'");
            return (Provenance::Cache, snapshot);
        }

        match self.fetch(username).await {
            Ok(snapshot) => {
                if let Err(e) = self.cache.save(username, &snapshot, now) {
                    log::warn!(target: LOG_TARGET, "Could not cache contributions for '{username}': {e:#}");
                }
                (Provenance::Network, snapshot)
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not get contributions for '{username}', using sample data: {e:#}");
                (Provenance::Fallback, synthesize(now.date_naive(), &mut rand::rng()))
            }
        }
    }

    async fn fetch(&self, username: &str) -> Result<ContributionsSnapshot> {
        let markup = self.client.fetch_calendar(username).await?;
        let snapshot = parse_calendar(&markup)?;

        log::info!(
            target: LOG_TARGET,
            "Fetched {} days of contributions for '{username}' ({} total)",
            snapshot.day_count(),
            snapshot.total_contributions
        );

        Ok(snapshot)
    }
}
