use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load config by layering: defaults, then the global file, then the
    /// project file under `root`, then `FOLIO_*` env overrides. An explicit
    /// path (flag or `FOLIO_CONFIG`) short-circuits file discovery.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("folio/config.toml"))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join("folio.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.content {
            self.content.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("FOLIO_CONTENT_DIR") {
            self.content.dir = PathBuf::from(dir);
        }
        if let Ok(limit) = std::env::var("FOLIO_SEARCH_LIMIT") {
            let parsed: usize = limit.parse().map_err(|_| {
                FolioError::Config(format!("FOLIO_SEARCH_LIMIT is not a number: {limit}"))
            })?;
            self.search.limit = parsed.min(SearchConfig::MAX_LIMIT);
        }
        Ok(())
    }
}

/// Where content lives, relative to the resolved root unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content root directory
    pub dir: PathBuf,
    /// Blog posts subdirectory (markdown with YAML front matter)
    pub blog_dir: String,
    /// Project catalog file
    pub projects_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            blog_dir: "blog".to_string(),
            projects_file: "projects.toml".to_string(),
        }
    }
}

impl ContentConfig {
    fn merge(&mut self, patch: ContentConfigPatch) {
        if let Some(dir) = patch.dir {
            self.dir = dir;
        }
        if let Some(blog_dir) = patch.blog_dir {
            self.blog_dir = blog_dir;
        }
        if let Some(projects_file) = patch.projects_file {
            self.projects_file = projects_file;
        }
    }

    /// Resolve the blog directory against `root`.
    #[must_use]
    pub fn blog_path(&self, root: &Path) -> PathBuf {
        self.resolve(root).join(&self.blog_dir)
    }

    /// Resolve the project catalog file against `root`.
    #[must_use]
    pub fn projects_path(&self, root: &Path) -> PathBuf {
        self.resolve(root).join(&self.projects_file)
    }

    fn resolve(&self, root: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            root.join(&self.dir)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum results returned by a search. Config files and the
    /// environment can lower this but never raise it past
    /// [`SearchConfig::MAX_LIMIT`].
    pub limit: usize,
    /// Weight applied to description/excerpt matches
    pub secondary_weight: f64,
    /// Weight applied to tag matches
    pub tag_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            secondary_weight: 0.7,
            tag_weight: 0.5,
        }
    }
}

impl SearchConfig {
    /// Hard ceiling on result counts.
    pub const MAX_LIMIT: usize = 10;

    fn merge(&mut self, patch: SearchConfigPatch) {
        if let Some(limit) = patch.limit {
            self.limit = limit.min(Self::MAX_LIMIT);
        }
        if let Some(weight) = patch.secondary_weight {
            self.secondary_weight = weight;
        }
        if let Some(weight) = patch.tag_weight {
            self.tag_weight = weight;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    content: Option<ContentConfigPatch>,
    search: Option<SearchConfigPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentConfigPatch {
    dir: Option<PathBuf>,
    blog_dir: Option<String>,
    projects_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchConfigPatch {
    limit: Option<usize>,
    secondary_weight: Option<f64>,
    tag_weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.search.limit, 10);
        assert!((config.search.secondary_weight - 0.7).abs() < f64::EPSILON);
        assert!((config.search.tag_weight - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.content.dir, PathBuf::from("content"));
    }

    #[test]
    fn patch_merges_partial_sections() {
        let mut config = Config::default();
        let patch: ConfigPatch = toml::from_str(
            r#"
            [search]
            limit = 5

            [content]
            blog_dir = "posts"
            "#,
        )
        .unwrap();
        config.merge_patch(patch);

        assert_eq!(config.search.limit, 5);
        // Untouched fields keep their defaults
        assert!((config.search.secondary_weight - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.content.blog_dir, "posts");
        assert_eq!(config.content.projects_file, "projects.toml");
    }

    #[test]
    fn limit_cannot_exceed_ceiling() {
        let mut config = Config::default();
        let patch: ConfigPatch = toml::from_str("[search]\nlimit = 50\n").unwrap();
        config.merge_patch(patch);
        assert_eq!(config.search.limit, SearchConfig::MAX_LIMIT);

        // Lowering still works
        let patch: ConfigPatch = toml::from_str("[search]\nlimit = 2\n").unwrap();
        config.merge_patch(patch);
        assert_eq!(config.search.limit, 2);
    }

    #[test]
    fn explicit_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[search]\nlimit = 3\n").unwrap();

        let config = Config::load(Some(&path), dir.path()).unwrap();
        assert_eq!(config.search.limit, 3);
    }

    #[test]
    fn content_paths_resolve_against_root() {
        let config = Config::default();
        let root = Path::new("/site");
        assert_eq!(
            config.content.blog_path(root),
            PathBuf::from("/site/content/blog")
        );
        assert_eq!(
            config.content.projects_path(root),
            PathBuf::from("/site/content/projects.toml")
        );
    }
}
