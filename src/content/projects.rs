//! Project catalog, loaded from a static TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ItemKind, SearchableItem};
use crate::error::{FolioError, Result};

/// A portfolio project. `technologies` doubles as the searchable tag field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

fn default_category() -> String {
    "personal".to_string()
}

impl Project {
    #[must_use]
    pub fn url(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    #[must_use]
    pub fn to_item(&self) -> SearchableItem {
        SearchableItem {
            kind: ItemKind::Project,
            title: self.title.clone(),
            secondary_text: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            tags: self.technologies.clone(),
            url: self.url(),
            date: self.date.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Load the project catalog. A missing file yields an empty collection with
/// a warning; a present-but-invalid file is an error.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    if !path.is_file() {
        warn!(path = %path.display(), "project catalog not found, no projects loaded");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path)?;
    let file: ProjectsFile = toml::from_str(&raw).map_err(|err| {
        FolioError::Content(format!("parse projects {}: {err}", path.display()))
    })?;

    debug!(count = file.projects.len(), path = %path.display(), "loaded projects");
    Ok(file.projects)
}
