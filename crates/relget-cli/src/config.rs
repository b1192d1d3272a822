use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "relget.toml";

/// Optional defaults read from relget.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// GitLab instance URL
    pub gitlab_url: Option<String>,

    /// Private token
    pub token: Option<String>,

    /// Proxy URL for all requests
    pub proxy: Option<String>,

    /// Overall request timeout in seconds
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Skip TLS certificate verification
    pub insecure: bool,

    pub user_agent: Option<String>,
}

impl FileConfig {
    /// Load configuration from relget.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                return Self::from_path(&config_path).map(Some);
            }

            // Move to parent directory
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
