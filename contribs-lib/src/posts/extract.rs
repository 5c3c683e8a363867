//! Ordered extraction rules for blog plugin data.
//!
//! The blog plugin has published its post list under several shapes over time. Rather
//! than branching on each shape inline, the shapes are listed as rules and tried in
//! order; the first rule that matches wins.

use super::blog_post::record_date;
use super::{BlogPost, LOG_TARGET};
use serde_json::Value;

/// Key under which site-wide global data nests the blog plugin's data.
const PLUGIN_KEY: &str = "docusaurus-plugin-content-blog";

/// Plugin instance whose data is used when the input is site-wide global data.
const PLUGIN_INSTANCE: &str = "default";

type ListRule = fn(&Value) -> Option<&Vec<Value>>;
type RecordRule = fn(&Value) -> Option<&Value>;

const LIST_RULES: [(&str, ListRule); 4] = [
    ("blogListPaginated.items", paginated_items),
    ("blogPosts", blog_posts),
    ("blogListItems", blog_list_items),
    ("first post-like array", first_post_like_array),
];

const RECORD_RULES: [RecordRule; 3] = [item_metadata, item_content_metadata, item_itself];

/// Where a post's date is looked for when the titled record has none.
const DATE_RULES: [RecordRule; 3] = [item_metadata, item_itself, item_content_metadata];

/// Find the list of raw post items in blog plugin data.
///
/// `data` may be the plugin's own data or the site-wide global data that contains it.
/// Returns an empty slice when no rule matches.
#[must_use]
pub fn locate_posts(data: &Value) -> &[Value] {
    let data = plugin_data(data);

    for (name, rule) in LIST_RULES {
        if let Some(items) = rule(data) {
            log::debug!(target: LOG_TARGET, "Found {} post items under '{name}'", items.len());
            return items;
        }
    }

    log::debug!(target: LOG_TARGET, "No post list found in blog data");
    &[]
}

/// Normalize one raw item into a [`BlogPost`], or `None` if no record in it has a title.
///
/// A post whose titled record carries no usable date takes the first date found in the
/// item's other records.
#[must_use]
pub fn normalize_post(item: &Value) -> Option<BlogPost> {
    let mut post = RECORD_RULES.iter().filter_map(|rule| rule(item)).find_map(BlogPost::from_record)?;

    if post.date.is_none() {
        post.date = DATE_RULES.iter().filter_map(|rule| rule(item)).find_map(record_date);
    }

    Some(post)
}

/// Locate and normalize every post in blog plugin data, dropping items without a title.
#[must_use]
pub fn extract_posts(data: &Value) -> Vec<BlogPost> {
    let items = locate_posts(data);
    let posts: Vec<BlogPost> = items.iter().filter_map(normalize_post).collect();

    if posts.len() < items.len() {
        log::debug!(target: LOG_TARGET, "Dropped {} post items without a title", items.len() - posts.len());
    }

    posts
}

fn plugin_data(data: &Value) -> &Value {
    data.get(PLUGIN_KEY).and_then(|plugin| plugin.get(PLUGIN_INSTANCE)).unwrap_or(data)
}

fn paginated_items(data: &Value) -> Option<&Vec<Value>> {
    data.get("blogListPaginated")?.get("items")?.as_array()
}

fn blog_posts(data: &Value) -> Option<&Vec<Value>> {
    data.get("blogPosts")?.as_array()
}

fn blog_list_items(data: &Value) -> Option<&Vec<Value>> {
    data.get("blogListItems")?.as_array()
}

fn first_post_like_array(data: &Value) -> Option<&Vec<Value>> {
    data.as_object()?
        .values()
        .filter_map(Value::as_array)
        .find(|items| items.first().is_some_and(looks_like_post))
}

fn item_metadata(item: &Value) -> Option<&Value> {
    item.get("metadata")
}

fn item_content_metadata(item: &Value) -> Option<&Value> {
    item.get("content")?.get("metadata")
}

const fn item_itself(item: &Value) -> Option<&Value> {
    Some(item)
}

fn looks_like_post(item: &Value) -> bool {
    let has = |value: Option<&Value>| value.is_some_and(is_truthy);

    has(item.get("metadata").and_then(|m| m.get("title")))
        || (has(item.get("title")) && has(item.get("permalink")))
        || has(item.get("content").and_then(|c| c.get("metadata")).and_then(|m| m.get("title")))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titles(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_paginated_items_take_precedence() {
        let data = json!({
            "blogListPaginated": { "items": [{ "metadata": { "title": "Paginated" } }] },
            "blogPosts": [{ "metadata": { "title": "Direct" } }],
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Paginated"]);
    }

    #[test]
    fn test_blog_posts_array() {
        let data = json!({
            "blogPosts": [{ "metadata": { "title": "Direct" } }],
            "blogListItems": [{ "metadata": { "title": "Listed" } }],
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Direct"]);
    }

    #[test]
    fn test_blog_list_items_array() {
        let data = json!({ "blogListItems": [{ "title": "Listed", "permalink": "/l" }] });
        assert_eq!(titles(&extract_posts(&data)), vec!["Listed"]);
    }

    #[test]
    fn test_non_array_known_keys_fall_through() {
        let data = json!({
            "blogPosts": "not an array",
            "other": [{ "title": "Scanned", "permalink": "/s" }],
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Scanned"]);
    }

    #[test]
    fn test_scan_skips_arrays_that_do_not_look_like_posts() {
        let data = json!({
            "authors": [{ "name": "someone" }],
            "empty": [],
            "titlesWithoutLinks": [{ "title": "No permalink" }],
            "nested": [{ "content": { "metadata": { "title": "Nested" } } }],
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Nested"]);
    }

    #[test]
    fn test_scan_only_checks_first_element() {
        let data = json!({
            "posts": [{ "metadata": { "title": "First" } }, { "unrelated": true }, { "title": "Third" }],
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["First", "Third"]);
    }

    #[test]
    fn test_site_global_data_is_unwrapped() {
        let data = json!({
            "docusaurus-plugin-content-docs": { "default": { "versions": [] } },
            "docusaurus-plugin-content-blog": {
                "default": { "blogPosts": [{ "metadata": { "title": "Nested in globals" } }] }
            },
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Nested in globals"]);
    }

    #[test]
    fn test_nothing_found() {
        assert!(locate_posts(&json!({ "version": 3 })).is_empty());
        assert!(locate_posts(&json!([1, 2, 3])).is_empty());
        assert!(extract_posts(&json!(null)).is_empty());
    }

    #[test]
    fn test_normalize_record_precedence() {
        let item = json!({
            "title": "Top level",
            "metadata": { "title": "From metadata" },
            "content": { "metadata": { "title": "From content" } },
        });
        assert_eq!(normalize_post(&item).unwrap().title, "From metadata");

        let item = json!({ "title": "Top level", "content": { "metadata": { "title": "From content" } } });
        assert_eq!(normalize_post(&item).unwrap().title, "From content");

        let item = json!({ "title": "Top level" });
        assert_eq!(normalize_post(&item).unwrap().title, "Top level");
    }

    #[test]
    fn test_normalize_skips_untitled_records() {
        let item = json!({ "metadata": { "description": "no title" }, "title": "Fallback title" });
        assert_eq!(normalize_post(&item).unwrap().title, "Fallback title");
    }

    #[test]
    fn test_date_taken_from_sibling_record() {
        let item = json!({ "metadata": { "title": "T" }, "date": "2024-01-02" });
        let post = normalize_post(&item).unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.date.unwrap().date_naive().to_string(), "2024-01-02");

        let item = json!({ "title": "T", "content": { "metadata": { "date": "2023-05-06" } } });
        assert_eq!(normalize_post(&item).unwrap().date.unwrap().date_naive().to_string(), "2023-05-06");
    }

    #[test]
    fn test_date_lookup_order() {
        let item = json!({
            "metadata": { "title": "T" },
            "date": "2024-01-02",
            "content": { "metadata": { "date": "2023-05-06" } },
        });
        assert_eq!(normalize_post(&item).unwrap().date.unwrap().date_naive().to_string(), "2024-01-02");

        let item = json!({ "metadata": { "title": "T", "date": "2022-09-10" }, "date": "2024-01-02" });
        assert_eq!(normalize_post(&item).unwrap().date.unwrap().date_naive().to_string(), "2022-09-10");
    }

    #[test]
    fn test_untitled_items_are_dropped() {
        let data = json!({
            "blogPosts": [
                { "metadata": { "title": "Kept" } },
                { "metadata": { "description": "untitled" } },
                42,
            ]
        });
        assert_eq!(titles(&extract_posts(&data)), vec!["Kept"]);
    }
}
