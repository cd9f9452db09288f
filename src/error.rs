use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML front matter error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Invalid front matter in {path}: {reason}")]
    InvalidFrontMatter { path: String, reason: String },

    #[error("Not an interactive terminal: {0}")]
    NotATerminal(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
