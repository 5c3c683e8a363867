use super::ContributionDay;

/// Streak statistics for a contribution history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    /// Length of the run of active days ending at the most recent day.
    pub current: u32,

    /// Length of the longest run of active days anywhere in the history.
    pub longest: u32,
}

/// Compute the current and longest streaks of days with a nonzero count.
///
/// Days are ordered most recent first before walking them, so the input order
/// does not matter. Adjacency is positional: the calendar source publishes one
/// cell per day, so neighbouring entries are neighbouring dates.
#[must_use]
pub fn compute_streaks<'a>(days: impl IntoIterator<Item = &'a ContributionDay>) -> Streaks {
    let mut sorted: Vec<&ContributionDay> = days.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    counts_streaks(sorted.iter().map(|day| day.count))
}

/// Walk counts ordered most recent first.
fn counts_streaks(counts: impl IntoIterator<Item = u32>) -> Streaks {
    let mut streaks = Streaks::default();
    let mut run = 0u32;
    let mut in_current = true;

    for count in counts {
        if count > 0 {
            run += 1;
            if in_current {
                streaks.current = run;
            }
            streaks.longest = streaks.longest.max(run);
        } else {
            in_current = false;
            run = 0;
        }
    }

    streaks
}
