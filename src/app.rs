use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::content::Catalog;
use crate::error::Result;

/// Shared state for command handlers. Content is loaded once here, before
/// any search runs, and stays frozen for the life of the process.
pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub catalog: Catalog,
    pub json_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = Self::find_root(cli)?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let catalog = Catalog::load(&config.content, &root)?;

        debug!(
            root = %root.display(),
            pages = catalog.pages.len(),
            posts = catalog.posts.len(),
            projects = catalog.projects.len(),
            "catalog loaded"
        );

        Ok(Self {
            root,
            config,
            catalog,
            json_mode: cli.json,
            verbosity: cli.verbose,
        })
    }

    fn find_root(cli: &Cli) -> Result<PathBuf> {
        if let Some(ref root) = cli.root {
            return Ok(root.clone());
        }
        if let Ok(root) = std::env::var("FOLIO_ROOT") {
            return Ok(PathBuf::from(root));
        }
        Ok(std::env::current_dir()?)
    }
}
