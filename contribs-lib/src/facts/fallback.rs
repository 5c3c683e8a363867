//! Synthetic calendar used when the real one cannot be acquired.

use super::{ContributionDay, ContributionWeek, ContributionsSnapshot, level_for_count};
use chrono::{Days, NaiveDate};
use rand::Rng;

/// Number of weeks in a synthetic calendar.
pub const FALLBACK_WEEKS: u64 = 52;

/// Placeholder current streak reported for synthetic data.
pub const FALLBACK_CURRENT_STREAK: u32 = 12;

/// Placeholder longest streak reported for synthetic data.
pub const FALLBACK_LONGEST_STREAK: u32 = 47;

const DAYS_PER_WEEK: u64 = 7;
const WEEKDAY_ACTIVITY_CHANCE: f64 = 0.7;
const WEEKEND_ACTIVITY_CHANCE: f64 = 0.4;
const MAX_SYNTHETIC_COUNT: u32 = 15;

/// Generate a plausible 52-week calendar whose last day is one week before `today`.
///
/// Weekdays (day indexes 1 through 5 of each week) are more likely to show activity
/// than weekends. The streak statistics are fixed placeholders and do not describe
/// the generated days.
pub fn synthesize<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> ContributionsSnapshot {
    let mut weeks = Vec::with_capacity(FALLBACK_WEEKS as usize);
    let mut total_contributions = 0u64;

    for week in 0..FALLBACK_WEEKS {
        let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);

        for day in 0..DAYS_PER_WEEK {
            let offset = (FALLBACK_WEEKS - week) * DAYS_PER_WEEK + (DAYS_PER_WEEK - 1 - day);
            let date = today.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);

            let is_weekday = (1..DAYS_PER_WEEK - 1).contains(&day);
            let chance = if is_weekday { WEEKDAY_ACTIVITY_CHANCE } else { WEEKEND_ACTIVITY_CHANCE };
            let count = if rng.random_bool(chance) {
                rng.random_range(1..=MAX_SYNTHETIC_COUNT)
            } else {
                0
            };

            total_contributions += u64::from(count);
            days.push(ContributionDay {
                date,
                count,
                level: level_for_count(count),
            });
        }

        weeks.push(ContributionWeek { days });
    }

    ContributionsSnapshot {
        total_contributions,
        weeks,
        current_streak: FALLBACK_CURRENT_STREAK,
        longest_streak: FALLBACK_LONGEST_STREAK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_shape() {
        let snapshot = synthesize(today(), &mut StdRng::seed_from_u64(7));
        assert_eq!(snapshot.weeks.len(), 52);
        assert!(snapshot.weeks.iter().all(|w| w.days.len() == 7));
        assert_eq!(snapshot.day_count(), 364);
        assert_eq!(snapshot.current_streak, FALLBACK_CURRENT_STREAK);
        assert_eq!(snapshot.longest_streak, FALLBACK_LONGEST_STREAK);
    }

    #[test]
    fn test_total_matches_days() {
        let snapshot = synthesize(today(), &mut StdRng::seed_from_u64(42));
        let sum: u64 = snapshot.days().map(|d| u64::from(d.count)).sum();
        assert_eq!(snapshot.total_contributions, sum);
    }

    #[test]
    fn test_levels_follow_counts() {
        let snapshot = synthesize(today(), &mut StdRng::seed_from_u64(3));
        for day in snapshot.days() {
            assert!(day.count <= MAX_SYNTHETIC_COUNT);
            assert_eq!(day.level, level_for_count(day.count));
        }
    }

    #[test]
    fn test_dates_are_consecutive_and_end_a_week_before_today() {
        let snapshot = synthesize(today(), &mut StdRng::seed_from_u64(1));
        let dates: Vec<NaiveDate> = snapshot.days().map(|d| d.date).collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
        assert_eq!(*dates.last().unwrap(), today().checked_sub_days(Days::new(7)).unwrap());
        assert_eq!(dates[0], today().checked_sub_days(Days::new(52 * 7 + 6)).unwrap());
    }

    #[test]
    fn test_same_seed_same_calendar() {
        let a = synthesize(today(), &mut StdRng::seed_from_u64(99));
        let b = synthesize(today(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
