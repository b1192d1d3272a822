//! Effective settings for one run: flags and environment first, then
//! relget.toml, then built-in defaults.

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

use relget_core::{DownloadRequest, HttpClientConfig};

use crate::config::FileConfig;
use crate::Cli;

pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30 * 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gitlab_url: String,
    pub token: Option<String>,
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub insecure: bool,
    pub user_agent: Option<String>,
    pub project: String,
    pub release: String,
    pub output: PathBuf,
    pub format_index: usize,
}

impl Settings {
    /// Merge command-line arguments over an optional config file.
    pub fn merge(cli: &Cli, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();

        let gitlab_url = non_empty(cli.gitlab_url.clone())
            .or(non_empty(file.gitlab_url))
            .unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string());

        Self {
            gitlab_url: gitlab_url.trim_end_matches('/').to_string(),
            token: non_empty(cli.token.clone()).or(non_empty(file.token)),
            proxy: non_empty(cli.proxy.clone()).or(non_empty(file.proxy)),
            timeout: Duration::from_secs(
                cli.timeout.or(file.timeout).unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            connect_timeout: Duration::from_secs(
                file.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            insecure: cli.insecure || file.insecure,
            user_agent: non_empty(file.user_agent),
            project: cli.project.clone().unwrap_or_default(),
            release: cli.release.clone().unwrap_or_default(),
            output: cli.out.clone().unwrap_or_default(),
            format_index: cli.ext,
        }
    }

    /// Check that everything the download needs is present.
    pub fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            bail!("project name is required (use --project)");
        }
        if self.release.trim().is_empty() {
            bail!("release version is required (use --release)");
        }
        if self.output.as_os_str().is_empty() {
            bail!("output path is required (use --out)");
        }
        if self.gitlab_url.is_empty() {
            bail!("GitLab URL is required");
        }
        if !self.gitlab_url.starts_with("https://") && !self.gitlab_url.starts_with("http://") {
            bail!("GitLab URL must start with http:// or https://: {}", self.gitlab_url);
        }
        Ok(())
    }

    pub fn http_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::new()
            .with_timeout(self.timeout)
            .with_connect_timeout(self.connect_timeout)
            .with_insecure(self.insecure);
        if let Some(proxy) = &self.proxy {
            config = config.with_proxy(proxy.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        config
    }

    pub fn download_request(&self) -> DownloadRequest {
        DownloadRequest {
            project_name: self.project.clone(),
            release_tag: self.release.clone(),
            output_path: self.output.clone(),
            format_index: self.format_index,
            token: self.token.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
