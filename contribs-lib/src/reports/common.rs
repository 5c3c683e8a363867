//! Common utilities shared across report generators.

use crate::facts::{ContributionDay, ContributionWeek};
use chrono::Datelike;

const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Row labels for the seven calendar rows, Sunday first. Only alternate rows are labeled.
pub const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// Cell colors per level, lightest first.
pub const LEVEL_COLORS: [(u8, u8, u8); 5] = [(0xeb, 0xed, 0xf0), (0x9b, 0xe9, 0xa8), (0x40, 0xc4, 0x63), (0x30, 0xa1, 0x4e), (0x21, 0x6e, 0x39)];

/// A month abbreviation anchored to a week column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub month: &'static str,
    pub week_index: usize,
}

/// Compute the month labels for a run of weeks.
///
/// The first non-empty week is always labeled with its month. Every later week is labeled
/// when its first day falls within the first seven days of a month, which marks the column
/// where that month begins. Empty weeks are skipped.
#[must_use]
pub fn month_labels(weeks: &[ContributionWeek]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.days.first() else {
            continue;
        };

        if labels.is_empty() || first.date.day() <= 7 {
            labels.push(MonthLabel {
                month: month_name(first),
                week_index,
            });
        }
    }

    labels
}

fn month_name(day: &ContributionDay) -> &'static str {
    MONTH_NAMES[day.date.month0() as usize]
}

/// The day of `week` that belongs in calendar row `row` (0 = Sunday).
#[must_use]
pub fn day_in_row(week: &ContributionWeek, row: usize) -> Option<&ContributionDay> {
    week.days.iter().find(|day| day.date.weekday().num_days_from_sunday() as usize == row)
}

/// Format a count with thousands separators.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// `"1 day"`, `"2 days"`.
#[must_use]
pub fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{} {unit}s", format_count(count))
    }
}
