use crate::Result;
use crate::posts::BlogPost;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Number of tags shown per post before collapsing the rest into a count.
const MAX_SHOWN_TAGS: usize = 3;

pub fn generate<W: Write>(posts: &[BlogPost], use_colors: bool, writer: &mut W) -> Result<()> {
    if posts.is_empty() {
        writeln!(writer, "No blog posts found")?;
        return Ok(());
    }

    for (index, post) in posts.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        if use_colors {
            writeln!(writer, "{}", post.title.bold())?;
        } else {
            writeln!(writer, "{}", post.title)?;
        }

        let mut when = post.date.map_or_else(|| "undated".to_string(), |date| date.format("%b %-d, %Y").to_string());
        if let Some(minutes) = post.reading_minutes() {
            write!(when, " • {minutes} min read")?;
        }
        writeln!(writer, "  {when}")?;

        if let Some(description) = &post.description {
            writeln!(writer, "  {description}")?;
        }

        if !post.tags.is_empty() {
            let mut tags: Vec<String> = post.tags.iter().take(MAX_SHOWN_TAGS).map(|tag| format!("#{}", tag.label)).collect();
            if post.tags.len() > MAX_SHOWN_TAGS {
                tags.push(format!("+{}", post.tags.len() - MAX_SHOWN_TAGS));
            }
            writeln!(writer, "  {}", tags.join(" "))?;
        }

        if let Some(permalink) = &post.permalink {
            if use_colors {
                writeln!(writer, "  {}", permalink.cyan())?;
            } else {
                writeln!(writer, "  {permalink}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(record: &serde_json::Value) -> BlogPost {
        BlogPost::from_record(record).unwrap()
    }

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate(&[], false, &mut output).unwrap();
        assert_eq!(output, "No blog posts found\n");
    }

    #[test]
    fn test_generate_full_post() {
        let posts = vec![post(&json!({
            "title": "Zero-copy parsing",
            "description": "Borrowing all the way down",
            "date": "2024-05-01",
            "permalink": "/blog/zero-copy",
            "tags": ["rust", "parsing", "perf", "serde", { "label": "nom" }],
            "readingTime": 6.2
        }))];

        let mut output = String::new();
        generate(&posts, false, &mut output).unwrap();
        assert_eq!(
            output,
            "Zero-copy parsing\n  May 1, 2024 • 7 min read\n  Borrowing all the way down\n  #rust #parsing #perf +2\n  /blog/zero-copy\n"
        );
    }

    #[test]
    fn test_generate_minimal_posts_are_separated() {
        let posts = vec![post(&json!({ "title": "One" })), post(&json!({ "title": "Two" }))];

        let mut output = String::new();
        generate(&posts, false, &mut output).unwrap();
        assert_eq!(output, "One\n  undated\n\nTwo\n  undated\n");
    }

    #[test]
    fn test_generate_with_colors() {
        let posts = vec![post(&json!({ "title": "One", "permalink": "/one" }))];

        let mut output = String::new();
        generate(&posts, true, &mut output).unwrap();
        assert!(output.contains("\x1b["));
    }
}
