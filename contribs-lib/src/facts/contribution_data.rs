use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest intensity level a calendar cell can carry.
pub const MAX_LEVEL: u8 = 4;

/// One day of the contribution calendar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,

    /// Visual intensity in `0..=4`, as published by the calendar source.
    pub level: u8,
}

/// A chronological run of days, normally Sunday through Saturday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// A user's contribution history as shown on their profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsSnapshot {
    pub total_contributions: u64,

    /// Weeks ordered oldest to newest.
    pub weeks: Vec<ContributionWeek>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl ContributionsSnapshot {
    /// Iterate over every day in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Number of days across all weeks.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|week| week.days.len()).sum()
    }

    /// Returns `true` if the snapshot has no days at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.iter().all(|week| week.days.is_empty())
    }

    /// The most recent day, if any.
    #[must_use]
    pub fn last_day(&self) -> Option<&ContributionDay> {
        self.weeks.iter().rev().find_map(|week| week.days.last())
    }
}

/// Bucket a contribution count into an intensity level.
///
/// `0 → 0`, `1–2 → 1`, `3–5 → 2`, `6–9 → 3`, `10+ → 4`.
#[must_use]
pub const fn level_for_count(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => MAX_LEVEL,
    }
}
