use super::common::{self, DAY_LABELS, LEVEL_COLORS};
use crate::Result;
use crate::facts::{ContributionDay, ContributionsSnapshot, MAX_LEVEL};
use chrono::{DateTime, Local};
use core::fmt::Write;

/// Write a self-contained HTML page showing the contribution calendar.
pub fn generate<W: Write>(username: &str, snapshot: &ContributionsSnapshot, timestamp: DateTime<Local>, writer: &mut W) -> Result<()> {
    let username = html_escape(username);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "  <meta charset=\"UTF-8\">")?;
    writeln!(writer, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(writer, "  <title>Contributions of {username}</title>")?;
    write_styles(writer)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;

    write_header(writer, &username, timestamp)?;
    write_stats(writer, snapshot)?;

    if snapshot.is_empty() {
        writeln!(writer, "  <p class=\"empty\">No contribution data available</p>")?;
    } else {
        write_calendar(writer, snapshot)?;
        write_legend(writer)?;
    }

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    Ok(())
}

fn write_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    :root {{")?;
    writeln!(writer, "      --bg-color: #ffffff;")?;
    writeln!(writer, "      --text-color: #1f2328;")?;
    writeln!(writer, "      --text-secondary: #59636e;")?;
    writeln!(writer, "      --card-bg: #f6f8fa;")?;
    writeln!(writer, "      --border-color: #d1d9e0;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    @media (prefers-color-scheme: dark) {{")?;
    writeln!(writer, "      :root {{")?;
    writeln!(writer, "        --bg-color: #0d1117;")?;
    writeln!(writer, "        --text-color: #f0f6fc;")?;
    writeln!(writer, "        --text-secondary: #9198a1;")?;
    writeln!(writer, "        --card-bg: #151b23;")?;
    writeln!(writer, "        --border-color: #3d444d;")?;
    writeln!(writer, "      }}")?;
    writeln!(writer, "    }}")?;
    writeln!(
        writer,
        "    body {{ margin: 0; padding: 32px; background: var(--bg-color); color: var(--text-color); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; }}"
    )?;
    writeln!(writer, "    h1 {{ margin: 0 0 4px 0; font-size: 24px; }}")?;
    writeln!(writer, "    .subtitle {{ margin: 0 0 24px 0; color: var(--text-secondary); font-size: 13px; }}")?;
    writeln!(writer, "    .stats {{ display: flex; gap: 16px; margin-bottom: 24px; }}")?;
    writeln!(
        writer,
        "    .stat {{ background: var(--card-bg); border: 1px solid var(--border-color); border-radius: 8px; padding: 12px 20px; }}"
    )?;
    writeln!(writer, "    .stat-value {{ font-size: 22px; font-weight: 700; }}")?;
    writeln!(writer, "    .stat-label {{ color: var(--text-secondary); font-size: 12px; }}")?;
    writeln!(writer, "    .calendar {{ border-spacing: 3px; font-size: 10px; color: var(--text-secondary); }}")?;
    writeln!(writer, "    .calendar th {{ font-weight: 400; text-align: left; height: 14px; }}")?;
    writeln!(writer, "    .calendar .day-label {{ padding-right: 4px; }}")?;
    writeln!(writer, "    .day {{ width: 11px; height: 11px; border-radius: 2px; padding: 0; }}")?;
    for level in 0..=MAX_LEVEL {
        let (r, g, b) = LEVEL_COLORS[usize::from(level)];
        writeln!(writer, "    .level-{level} {{ background: #{r:02x}{g:02x}{b:02x}; }}")?;
    }
    writeln!(writer, "    .legend {{ display: flex; align-items: center; gap: 3px; margin-top: 8px; font-size: 10px; color: var(--text-secondary); }}")?;
    writeln!(writer, "    .legend .day {{ display: inline-block; }}")?;
    writeln!(writer, "    .empty {{ color: var(--text-secondary); }}")?;
    writeln!(writer, "  </style>")?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, username: &str, timestamp: DateTime<Local>) -> Result<()> {
    writeln!(writer, "  <h1>Contributions of {username}</h1>")?;
    writeln!(
        writer,
        "  <p class=\"subtitle\">Produced by contribs {} on {}</p>",
        env!("CARGO_PKG_VERSION"),
        timestamp.format("%Y-%m-%d")
    )?;
    Ok(())
}

fn write_stats<W: Write>(writer: &mut W, snapshot: &ContributionsSnapshot) -> Result<()> {
    writeln!(writer, "  <div class=\"stats\">")?;
    write_stat(writer, &common::format_count(snapshot.total_contributions), "Total contributions")?;
    write_stat(writer, &common::plural(snapshot.current_streak.into(), "day"), "Current streak")?;
    write_stat(writer, &common::plural(snapshot.longest_streak.into(), "day"), "Longest streak")?;
    writeln!(writer, "  </div>")?;
    Ok(())
}

fn write_stat<W: Write>(writer: &mut W, value: &str, label: &str) -> Result<()> {
    writeln!(
        writer,
        "    <div class=\"stat\"><div class=\"stat-value\">{value}</div><div class=\"stat-label\">{label}</div></div>"
    )?;
    Ok(())
}

fn write_calendar<W: Write>(writer: &mut W, snapshot: &ContributionsSnapshot) -> Result<()> {
    let labels = common::month_labels(&snapshot.weeks);

    writeln!(writer, "  <table class=\"calendar\">")?;
    writeln!(writer, "    <thead>")?;
    write!(writer, "      <tr><th></th>")?;
    for week_index in 0..snapshot.weeks.len() {
        match labels.iter().find(|label| label.week_index == week_index) {
            Some(label) => write!(writer, "<th>{}</th>", label.month)?,
            None => write!(writer, "<th></th>")?,
        }
    }
    writeln!(writer, "</tr>")?;
    writeln!(writer, "    </thead>")?;

    writeln!(writer, "    <tbody>")?;
    for (row, label) in DAY_LABELS.iter().enumerate() {
        write!(writer, "      <tr><td class=\"day-label\">{label}</td>")?;
        for week in &snapshot.weeks {
            match common::day_in_row(week, row) {
                Some(day) => write_day(writer, day)?,
                None => write!(writer, "<td></td>")?,
            }
        }
        writeln!(writer, "</tr>")?;
    }
    writeln!(writer, "    </tbody>")?;
    writeln!(writer, "  </table>")?;
    Ok(())
}

fn write_day<W: Write>(writer: &mut W, day: &ContributionDay) -> Result<()> {
    let date = day.date.format("%b %-d, %Y");
    let title = match day.count {
        0 => format!("No contributions on {date}"),
        1 => format!("1 contribution on {date}"),
        n => format!("{n} contributions on {date}"),
    };

    write!(
        writer,
        "<td class=\"day level-{}\" data-count=\"{}\" data-date=\"{}\" title=\"{title}\"></td>",
        day.level.min(MAX_LEVEL),
        day.count,
        day.date.format("%Y-%m-%d")
    )?;
    Ok(())
}

fn write_legend<W: Write>(writer: &mut W) -> Result<()> {
    write!(writer, "  <div class=\"legend\">Less ")?;
    for level in 0..=MAX_LEVEL {
        write!(writer, "<span class=\"day level-{level}\"></span>")?;
    }
    writeln!(writer, " More</div>")?;
    Ok(())
}

fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
