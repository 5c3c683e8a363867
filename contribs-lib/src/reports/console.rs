use super::common::{self, DAY_LABELS, LEVEL_COLORS};
use crate::Result;
use crate::facts::{ContributionsSnapshot, MAX_LEVEL};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Width of the row label column, e.g. `"Wed "`.
const LABEL_WIDTH: usize = 4;

/// Width of one week column: a cell and a separating space.
const CELL_WIDTH: usize = 2;

const LEVEL_GLYPHS: [&str; 5] = ["·", "░", "▒", "▓", "█"];
const COLOR_GLYPH: &str = "■";

/// Draw the calendar heatmap for a terminal `width` columns wide.
///
/// Only the most recent weeks that fit are drawn.
pub fn generate<W: Write>(username: &str, snapshot: &ContributionsSnapshot, use_colors: bool, width: usize, writer: &mut W) -> Result<()> {
    let title = format!(
        "{} in the last year for {username}",
        common::plural(snapshot.total_contributions, "contribution")
    );
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    writeln!(
        writer,
        "Current streak: {}   Longest streak: {}",
        common::plural(snapshot.current_streak.into(), "day"),
        common::plural(snapshot.longest_streak.into(), "day")
    )?;
    writeln!(writer)?;

    if snapshot.is_empty() {
        writeln!(writer, "No contribution data available")?;
        return Ok(());
    }

    let max_weeks = (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1);
    let weeks = &snapshot.weeks[snapshot.weeks.len().saturating_sub(max_weeks)..];

    let mut month_row = " ".repeat(LABEL_WIDTH);
    for label in common::month_labels(weeks) {
        let column = LABEL_WIDTH + label.week_index * CELL_WIDTH;

        // Labels need a space between them
        if column < month_row.len() || (column == month_row.len() && column > LABEL_WIDTH) {
            continue;
        }

        month_row.push_str(&" ".repeat(column - month_row.len()));
        month_row.push_str(label.month);
    }
    writeln!(writer, "{}", month_row.trim_end())?;

    for (row, label) in DAY_LABELS.iter().enumerate() {
        let mut line = format!("{label:<LABEL_WIDTH$}");
        for week in weeks {
            match common::day_in_row(week, row) {
                Some(day) => line.push_str(&cell(day.level, use_colors)),
                None => line.push(' '),
            }
            line.push(' ');
        }
        writeln!(writer, "{}", line.trim_end())?;
    }

    writeln!(writer)?;
    let legend: Vec<String> = (0..=MAX_LEVEL).map(|level| cell(level, use_colors)).collect();
    writeln!(writer, "{:LABEL_WIDTH$}Less {} More", "", legend.join(" "))?;

    Ok(())
}

/// Get the terminal width, defaulting to 80 if not detectable
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

fn cell(level: u8, use_colors: bool) -> String {
    let index = usize::from(level.min(MAX_LEVEL));
    if use_colors {
        let (r, g, b) = LEVEL_COLORS[index];
        COLOR_GLYPH.truecolor(r, g, b).to_string()
    } else {
        LEVEL_GLYPHS[index].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{ContributionDay, ContributionWeek, level_for_count};
    use chrono::{Days, NaiveDate};

    /// `weeks` full weeks starting on Sunday 2024-01-07, counts cycling 0..12.
    fn snapshot(weeks: u64) -> ContributionsSnapshot {
        let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let weeks: Vec<ContributionWeek> = (0..weeks)
            .map(|w| ContributionWeek {
                days: (0..7)
                    .map(|d| {
                        let count = u32::try_from((w * 7 + d) % 12).unwrap();
                        ContributionDay {
                            date: start.checked_add_days(Days::new(w * 7 + d)).unwrap(),
                            count,
                            level: level_for_count(count),
                        }
                    })
                    .collect(),
            })
            .collect();

        ContributionsSnapshot {
            total_contributions: weeks.iter().flat_map(|w| &w.days).map(|d| u64::from(d.count)).sum(),
            weeks,
            current_streak: 3,
            longest_streak: 11,
        }
    }

    #[test]
    fn test_generate_plain() {
        let mut output = String::new();
        generate("octocat", &snapshot(10), false, 120, &mut output).unwrap();

        assert!(output.starts_with("375 contributions in the last year for octocat\n"));
        assert!(output.contains("Current streak: 3 days   Longest streak: 11 days"));
        assert!(output.contains("\nMon "));
        assert!(output.contains("\nWed "));
        assert!(output.contains("\nFri "));
        assert!(output.contains("Less · ░ ▒ ▓ █ More"));
        assert!(output.contains("    Jan"));
        assert!(output.contains("Feb"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_generate_draws_seven_rows_of_cells() {
        let mut output = String::new();
        generate("octocat", &snapshot(4), false, 120, &mut output).unwrap();

        // title, streaks, blank, months, 7 rows, blank, legend
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 13);
        for line in &lines[4..11] {
            assert_eq!(line.chars().skip(LABEL_WIDTH).filter(|c| !c.is_whitespace()).count(), 4);
        }
    }

    #[test]
    fn test_generate_clips_to_width() {
        let mut output = String::new();
        generate("octocat", &snapshot(52), false, LABEL_WIDTH + 3 * CELL_WIDTH, &mut output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        for line in &lines[4..11] {
            assert_eq!(line.chars().skip(LABEL_WIDTH).filter(|c| !c.is_whitespace()).count(), 3);
        }
    }

    #[test]
    fn test_generate_with_colors() {
        let mut output = String::new();
        generate("octocat", &snapshot(2), true, 120, &mut output).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains(COLOR_GLYPH));
    }

    #[test]
    fn test_generate_empty_snapshot() {
        let mut output = String::new();
        generate("ghost", &ContributionsSnapshot::default(), false, 80, &mut output).unwrap();
        assert!(output.contains("0 contributions in the last year for ghost"));
        assert!(output.contains("No contribution data available"));
        assert!(!output.contains("Less"));
    }

    #[test]
    fn test_partial_week_leaves_gaps() {
        // 2024-03-06 is a Wednesday; only Wednesday through Saturday exist
        let start = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let snapshot = ContributionsSnapshot {
            total_contributions: 4,
            weeks: vec![ContributionWeek {
                days: start
                    .iter_days()
                    .take(4)
                    .map(|date| ContributionDay { date, count: 1, level: 1 })
                    .collect(),
            }],
            current_streak: 4,
            longest_streak: 4,
        };

        let mut output = String::new();
        generate("octocat", &snapshot, false, 80, &mut output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Mon");
        assert_eq!(lines[7], "Wed ░");
    }
}
