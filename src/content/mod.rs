//! Content model - the three collections the search runs over.
//!
//! Pages are compiled in; blog posts are discovered from markdown files with
//! YAML front matter; projects come from a TOML catalog. Each record reduces
//! to a common [`SearchableItem`] shape before scoring.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ContentConfig;
use crate::error::Result;

pub mod blog;
pub mod frontmatter;
pub mod pages;
pub mod projects;

pub use blog::BlogPost;
pub use pages::Page;
pub use projects::Project;

/// Which collection an item came from. Closed set, not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Page,
    Blog,
    Project,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }
}

/// The common matchable shape every record reduces to.
///
/// `url` is opaque to the search logic; `date` is display-only and never
/// matched against.
#[derive(Debug, Clone)]
pub struct SearchableItem {
    pub kind: ItemKind,
    pub title: String,
    pub secondary_text: Option<String>,
    pub tags: Vec<String>,
    pub url: String,
    pub date: Option<String>,
}

/// All loaded content, frozen for the lifetime of the process.
///
/// Scan order is fixed: pages, then blog posts, then projects. Search ties
/// resolve in that order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub pages: Vec<Page>,
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Load all collections. Missing blog directories or project catalogs
    /// degrade to empty collections with a warning; they are not errors.
    pub fn load(content: &ContentConfig, root: &Path) -> Result<Self> {
        let posts = blog::load_posts(&content.blog_path(root))?;
        let projects = projects::load_projects(&content.projects_path(root))?;

        Ok(Self {
            pages: pages::builtin_pages(),
            posts,
            projects,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len() + self.posts.len() + self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every record in fixed scan order, reduced to the common shape.
    pub fn items(&self) -> impl Iterator<Item = SearchableItem> + '_ {
        self.pages
            .iter()
            .map(Page::to_item)
            .chain(self.posts.iter().map(BlogPost::to_item))
            .chain(self.projects.iter().map(Project::to_item))
    }
}
