//! The fixed site page list, known at compile time.

use serde::Serialize;

use super::{ItemKind, SearchableItem};

/// A top-level site page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl Page {
    #[must_use]
    pub fn to_item(&self) -> SearchableItem {
        SearchableItem {
            kind: ItemKind::Page,
            title: self.title.clone(),
            secondary_text: Some(self.description.clone()),
            tags: Vec::new(),
            url: self.url.clone(),
            date: None,
        }
    }
}

const PAGES: &[(&str, &str, &str)] = &[
    ("Home", "/", "Main landing page"),
    ("About", "/about", "Learn more about me"),
    ("Projects", "/projects", "View my projects"),
    ("Blog", "/blog", "Read my blog posts"),
    ("Competitive", "/competitive", "CP & DSA progress"),
];

/// The built-in page collection, in display order.
#[must_use]
pub fn builtin_pages() -> Vec<Page> {
    PAGES
        .iter()
        .map(|&(title, url, description)| Page {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        })
        .collect()
}
