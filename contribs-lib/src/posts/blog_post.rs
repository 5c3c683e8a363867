use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

/// A tag attached to a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// Canonical blog post metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication instant; `None` when absent or unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Estimated reading time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<f64>,
}

impl BlogPost {
    /// Build a post from one metadata record.
    ///
    /// Returns `None` if the record has no non-empty `title`. Every other field is optional
    /// and silently ignored when it has an unexpected shape.
    #[must_use]
    pub fn from_record(record: &Value) -> Option<Self> {
        let title = non_empty_str(record, "title")?;

        Some(Self {
            title: title.to_string(),
            description: non_empty_str(record, "description").map(str::to_string),
            date: record_date(record),
            permalink: non_empty_str(record, "permalink").map(str::to_string),
            image: non_empty_str(record, "image").map(str::to_string),
            tags: record
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| tags.iter().filter_map(parse_tag).collect())
                .unwrap_or_default(),
            reading_time: record.get("readingTime").and_then(Value::as_f64).filter(|t| t.is_finite() && *t >= 0.0),
        })
    }

    /// Reading time rounded up to whole minutes.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "reading time is a small non-negative number")]
    pub fn reading_minutes(&self) -> Option<u32> {
        self.reading_time.map(|t| t.ceil() as u32)
    }
}

/// The parsed `date` field of a record, if present and well-formed.
pub(super) fn record_date(record: &Value) -> Option<DateTime<Utc>> {
    record.get("date").and_then(Value::as_str).and_then(parse_date)
}

fn non_empty_str<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn parse_tag(value: &Value) -> Option<Tag> {
    match value {
        Value::String(label) if !label.is_empty() => Some(Tag {
            label: label.clone(),
            permalink: None,
        }),
        Value::Object(_) => Some(Tag {
            label: non_empty_str(value, "label")?.to_string(),
            permalink: non_empty_str(value, "permalink").map(str::to_string),
        }),
        _ => None,
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (taken as midnight UTC).
fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
