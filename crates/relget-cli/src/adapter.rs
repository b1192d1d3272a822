//! Wiring of the concrete GitLab client, HTTP transfer and file sink.

use anyhow::{Context, Result};
use std::sync::Arc;

use relget_core::{FileSink, GitLabClient, HttpTransfer, ProgressReporter, ReleaseService};

use crate::settings::Settings;

pub type Service = ReleaseService<GitLabClient, HttpTransfer, FileSink>;

/// Build the download service for the given settings.
///
/// API calls and the asset download share one HTTP client so proxy,
/// timeout and TLS settings apply to both.
pub fn build_service(settings: &Settings, progress: Arc<dyn ProgressReporter>) -> Result<Service> {
    let client = settings
        .http_config()
        .build()
        .context("Failed to create HTTP client")?;

    let mut forge = GitLabClient::new(client.clone(), settings.gitlab_url.clone());
    if let Some(token) = &settings.token {
        forge = forge.with_private_token(token.clone());
    }

    let transfer = HttpTransfer::new(client).with_progress(progress);

    Ok(ReleaseService::new(forge, transfer, FileSink))
}
