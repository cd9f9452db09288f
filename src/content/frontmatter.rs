//! YAML front matter parsing for markdown content.
//!
//! Posts carry an embedded metadata header between `---` fences:
//!
//! ```text
//! ---
//! title: Understanding Caching
//! date: 2024-06-01
//! tags: [systems, caching]
//! ---
//!
//! Body...
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{FolioError, Result};

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n?(.*)\z").expect("front matter fence regex")
});

/// Raw metadata header fields. Everything is optional; defaults are applied
/// by [`FrontMatter::into_metadata`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "readTime", alias = "read_time")]
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Metadata with defaults applied.
#[derive(Debug, Clone)]
pub struct PostMetadata {
    pub title: String,
    pub date: Option<String>,
    pub read_time: String,
    pub category: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Apply defaults. `word_count` drives the read-time estimate when the
    /// header does not set one: 200 words per minute, rounded up.
    #[must_use]
    pub fn into_metadata(self, word_count: usize) -> PostMetadata {
        PostMetadata {
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            date: self.date,
            read_time: self
                .read_time
                .unwrap_or_else(|| format!("{} min read", word_count.div_ceil(200).max(1))),
            category: self.category.unwrap_or_else(|| "general".to_string()),
            excerpt: self.excerpt.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        }
    }
}

/// Split a document into its front matter block and body, if fenced.
#[must_use]
pub fn split(content: &str) -> Option<(&str, &str)> {
    let caps = FENCE.captures(content)?;
    let header = caps.get(1)?.as_str();
    let body = caps.get(2).map_or("", |m| m.as_str());
    Some((header, body.trim()))
}

/// Parse a markdown document into metadata and body.
///
/// A missing fence is an error at this level; the blog loader decides whether
/// to skip the file or fail.
pub fn parse(content: &str, path: &str) -> Result<(PostMetadata, String)> {
    let Some((header, body)) = split(content) else {
        return Err(FolioError::InvalidFrontMatter {
            path: path.to_string(),
            reason: "missing --- front matter fence".to_string(),
        });
    };

    let front: FrontMatter =
        serde_yaml::from_str(header).map_err(|err| FolioError::InvalidFrontMatter {
            path: path.to_string(),
            reason: err.to_string(),
        })?;

    let word_count = content.split_whitespace().count();
    Ok((front.into_metadata(word_count), body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\ntitle: Understanding Caching\ndate: 2024-06-01\nexcerpt: A deep dive into cache eviction\ntags: [systems, caching]\n---\n\nBody text here.\n";

    #[test]
    fn parses_fenced_header() {
        let (meta, body) = parse(DOC, "understanding-caching.md").unwrap();
        assert_eq!(meta.title, "Understanding Caching");
        assert_eq!(meta.date.as_deref(), Some("2024-06-01"));
        assert_eq!(meta.excerpt, "A deep dive into cache eviction");
        assert_eq!(meta.tags, vec!["systems", "caching"]);
        assert_eq!(body, "Body text here.");
    }

    #[test]
    fn defaults_for_missing_fields() {
        let (meta, _) = parse("---\ndate: 2024-01-01\n---\nshort body\n", "x.md").unwrap();
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.category, "general");
        assert!(meta.tags.is_empty());
        assert!(meta.excerpt.is_empty());
        // 6 words total, well under a minute
        assert_eq!(meta.read_time, "1 min read");
    }

    #[test]
    fn read_time_rounds_up() {
        let words = vec!["word"; 450].join(" ");
        let doc = format!("---\ntitle: Long\n---\n{words}\n");
        let (meta, _) = parse(&doc, "long.md").unwrap();
        assert_eq!(meta.read_time, "3 min read");
    }

    #[test]
    fn explicit_read_time_wins() {
        let (meta, _) = parse("---\ntitle: T\nreadTime: 7 min read\n---\nbody\n", "x.md").unwrap();
        assert_eq!(meta.read_time, "7 min read");
    }

    #[test]
    fn missing_fence_is_an_error() {
        let err = parse("no front matter here", "plain.md").unwrap_err();
        assert!(err.to_string().contains("plain.md"));
    }

    #[test]
    fn crlf_fences() {
        let (meta, body) = parse("---\r\ntitle: Windows\r\n---\r\nbody\r\n", "w.md").unwrap();
        assert_eq!(meta.title, "Windows");
        assert!(body.starts_with("body"));
    }
}
