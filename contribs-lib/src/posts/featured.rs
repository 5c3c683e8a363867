use super::BlogPost;

/// Number of featured posts shown unless configured otherwise.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Pick the `limit` most recent posts.
///
/// Posts without a usable date sort after every dated post, keeping their relative order.
#[must_use]
pub fn featured_posts(mut posts: Vec<BlogPost>, limit: usize) -> Vec<BlogPost> {
    // `None < Some(_)`, so a descending sort puts undated posts last
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts.truncate(limit);
    posts
}
