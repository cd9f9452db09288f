//! Blog post discovery.
//!
//! Walks the configured blog directory for `*.md` files, parses each file's
//! front matter, and derives the slug from the file stem. Malformed files are
//! skipped with a warning; a missing directory yields an empty collection.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::frontmatter;
use super::{ItemKind, SearchableItem};
use crate::error::Result;

/// A discovered blog post.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub read_time: String,
    pub category: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    #[must_use]
    pub fn url(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    #[must_use]
    pub fn to_item(&self) -> SearchableItem {
        SearchableItem {
            kind: ItemKind::Blog,
            title: self.title.clone(),
            secondary_text: if self.excerpt.is_empty() {
                None
            } else {
                Some(self.excerpt.clone())
            },
            tags: self.tags.clone(),
            url: self.url(),
            date: self.date.clone(),
        }
    }
}

/// Load every post under `dir`, newest first.
pub fn load_posts(dir: &Path) -> Result<Vec<BlogPost>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "blog directory not found, no posts loaded");
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable post");
                continue;
            }
        };

        match frontmatter::parse(&raw, &path.display().to_string()) {
            Ok((meta, _body)) => {
                posts.push(BlogPost {
                    slug: slug.to_string(),
                    title: meta.title,
                    date: meta.date,
                    read_time: meta.read_time,
                    category: meta.category,
                    excerpt: meta.excerpt,
                    tags: meta.tags,
                });
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping malformed post");
            }
        }
    }

    // Newest first; undated or unparseable dates sort last, ties keep the
    // filesystem walk order.
    posts.sort_by_key(|p| std::cmp::Reverse(p.date.as_deref().and_then(parse_date)));

    debug!(count = posts.len(), dir = %dir.display(), "loaded blog posts");
    Ok(posts)
}

/// Best-effort date parsing for the formats the content actually uses.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}
