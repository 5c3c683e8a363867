//! Scraping of the contribution calendar markup.
//!
//! The calendar is published as HTML where each day is an element carrying
//! `data-level`, `data-count`, and `data-date` attributes. The attributes are
//! read from each tag independently so their order within the tag is irrelevant.

use super::{ContributionDay, ContributionWeek, ContributionsSnapshot, MAX_LEVEL, compute_streaks};
use crate::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use ohno::bail;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const LOG_TARGET: &str = "  calendar";

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("invalid regex"));
static LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| attribute_regex("data-level"));
static COUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| attribute_regex("data-count"));
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| attribute_regex("data-date"));

fn attribute_regex(name: &str) -> Regex {
    Regex::new(&format!(r#"\s{name}\s*=\s*"([^"]*)""#)).expect("invalid regex")
}

/// Parse calendar markup into a snapshot with weeks and streaks filled in.
///
/// Tags that carry all three attributes but hold malformed values are skipped.
/// Markup without any calendar cells yields an empty snapshot.
///
/// # Errors
///
/// Returns an error if the markup contains calendar cells but none of them could
/// be read, which indicates the page format is not the one expected.
pub fn parse_calendar(markup: &str) -> Result<ContributionsSnapshot> {
    let mut by_date: BTreeMap<NaiveDate, ContributionDay> = BTreeMap::new();
    let mut cells = 0usize;

    for tag in TAG_REGEX.find_iter(markup) {
        let tag = tag.as_str();
        let (Some(level), Some(count), Some(date)) = (
            capture(&LEVEL_REGEX, tag),
            capture(&COUNT_REGEX, tag),
            capture(&DATE_REGEX, tag),
        ) else {
            continue;
        };

        cells += 1;
        match parse_cell(level, count, date) {
            Some(day) => {
                let _ = by_date.insert(day.date, day);
            }
            None => {
                log::debug!(target: LOG_TARGET, "Skipping malformed calendar cell: {tag}");
            }
        }
    }

    if cells > 0 && by_date.is_empty() {
        bail!("none of the {cells} calendar cells could be parsed");
    }

    log::debug!(target: LOG_TARGET, "Parsed {} of {cells} calendar cells", by_date.len());

    let streaks = compute_streaks(by_date.values());
    let total_contributions = by_date.values().map(|day| u64::from(day.count)).sum();

    Ok(ContributionsSnapshot {
        total_contributions,
        weeks: group_into_weeks(by_date.into_values()),
        current_streak: streaks.current,
        longest_streak: streaks.longest,
    })
}

fn capture<'a>(regex: &Regex, tag: &'a str) -> Option<&'a str> {
    regex.captures(tag).and_then(|c| c.get(1)).map(|m| m.as_str())
}

fn parse_cell(level: &str, count: &str, date: &str) -> Option<ContributionDay> {
    let level = level.trim().parse::<u8>().ok().filter(|&l| l <= MAX_LEVEL)?;
    let count = count.trim().parse::<u32>().ok()?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;

    Some(ContributionDay { date, count, level })
}

/// Split chronologically ordered days into weeks, closing a week after each Saturday.
fn group_into_weeks(days: impl IntoIterator<Item = ContributionDay>) -> Vec<ContributionWeek> {
    let mut weeks = Vec::new();
    let mut current = ContributionWeek::default();

    for day in days {
        let is_saturday = day.date.weekday() == Weekday::Sat;
        current.days.push(day);
        if is_saturday {
            weeks.push(core::mem::take(&mut current));
        }
    }

    if !current.days.is_empty() {
        weeks.push(current);
    }

    weeks
}
