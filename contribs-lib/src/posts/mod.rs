//! Blog post metadata normalization
//!
//! A static-site blog plugin exposes its posts as loosely-typed JSON whose layout has varied
//! between versions. This module finds the post list in such data, normalizes every entry
//! into a [`BlogPost`], and selects the most recent ones for display.

mod blog_post;
mod extract;
mod featured;

pub use blog_post::{BlogPost, Tag};
pub use extract::{extract_posts, locate_posts, normalize_post};
pub use featured::{DEFAULT_FEATURED_COUNT, featured_posts};

use crate::Result;
use ohno::IntoAppError;
use std::fs;
use std::path::Path;

const LOG_TARGET: &str = "     posts";

/// Read blog plugin data from a JSON file and extract its posts.
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<BlogPost>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading blog data from '{}'", path.display()))?;
    let data: serde_json::Value =
        serde_json::from_str(&text).into_app_err_with(|| format!("parsing blog data in '{}'", path.display()))?;
    let posts = extract_posts(&data);
    log::info!(target: LOG_TARGET, "Found {} blog post(s) in '{}'", posts.len(), path.display());
    Ok(posts)
}
