//! Contribution calendar acquisition and caching
//!
//! This module is responsible for turning a GitHub username into a
//! [`ContributionsSnapshot`]: daily counts grouped into weeks, plus streak statistics.
//!
//! # Implementation Model
//!
//! The [`Provider`] runs a single linear pipeline for each request:
//!
//! 1. Look the username up in the [`Cache`], which keeps timestamped entries in a
//!    pluggable [`Store`] and evicts them once they are older than the TTL.
//! 2. On a miss, download the public contribution calendar markup.
//! 3. Scrape the calendar cells out of the markup and group them into weeks.
//! 4. Compute the current and longest streaks.
//! 5. Store the snapshot in the cache and return it.
//!
//! Any failure in steps 2 and 3 degrades to a synthetic snapshot so that callers
//! always receive something they can render. [`Provenance`] records which path
//! produced the returned data.

mod cache;
mod calendar;
mod client;
mod contribution_data;
mod fallback;
mod path_utils;
mod provider;
mod store;
mod streaks;

pub use cache::{CACHE_KEY_PREFIX, Cache, CacheResult, DEFAULT_CACHE_TTL};
pub use calendar::parse_calendar;
pub use client::{CALENDAR_BASE_URL, Client, DEFAULT_REQUEST_TIMEOUT};
pub use contribution_data::{ContributionDay, ContributionWeek, ContributionsSnapshot, MAX_LEVEL, level_for_count};
pub use fallback::{FALLBACK_CURRENT_STREAK, FALLBACK_LONGEST_STREAK, FALLBACK_WEEKS, synthesize};
pub use provider::{Provenance, Provider};
pub use store::{FileStore, MemoryStore, NullStore, Store};
pub use streaks::{Streaks, compute_streaks};
