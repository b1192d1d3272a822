//! GitLab forge client - uses the GitLab REST API v4.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::Forge;
use crate::error::ForgeError;
use crate::release::{Assets, Link, Project, Release, Source};

/// GitLab API client for project and release lookups
pub struct GitLabClient {
    client: Client,
    /// Instance base URL (e.g., "https://gitlab.com" or self-hosted)
    base_url: String,
    /// Private token (optional)
    private_token: Option<String>,
}

impl GitLabClient {
    /// Create a client for the instance at `base_url`
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            private_token: None,
        }
    }

    /// Set private token for authentication
    pub fn with_private_token(mut self, token: impl Into<String>) -> Self {
        self.private_token = Some(token.into());
        self
    }

    fn api_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ForgeError> {
        let url = format!("{}/api/v4{}", self.base_url, endpoint);
        log::trace!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/json");

        if let Some(token) = &self.private_token {
            request = request.header("PRIVATE-TOKEN", token.as_str());
        }

        let response = request.send().map_err(ForgeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(ForgeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json().map_err(ForgeError::Decode)
    }
}

impl Forge for GitLabClient {
    fn host(&self) -> &str {
        &self.base_url
    }

    fn project(&self, name: &str) -> Result<Project, ForgeError> {
        // The whole namespaced path is one segment: "group/repo" -> "group%2Frepo"
        let encoded = urlencoding::encode(name);
        let response: ProjectResponse = self.api_request(&format!("/projects/{}", encoded))?;

        Ok(Project {
            id: response.id,
            name: response.name,
        })
    }

    fn release(&self, project_id: u64, tag: &str) -> Result<Release, ForgeError> {
        let response: ReleaseResponse =
            self.api_request(&format!("/projects/{}/releases/{}", project_id, tag))?;

        Ok(response.into_release(project_id))
    }
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    tag_name: String,
    #[serde(default)]
    assets: AssetsResponse,
}

#[derive(Debug, Default, Deserialize)]
struct AssetsResponse {
    #[serde(default)]
    links: Vec<LinkResponse>,
    #[serde(default)]
    sources: Vec<SourceResponse>,
}

#[derive(Debug, Deserialize)]
struct LinkResponse {
    #[serde(default)]
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct SourceResponse {
    #[serde(default)]
    format: String,
    url: String,
}

impl ReleaseResponse {
    fn into_release(self, project_id: u64) -> Release {
        Release {
            project_id,
            tag: self.tag_name,
            assets: Assets {
                links: self
                    .assets
                    .links
                    .into_iter()
                    .map(|link| Link {
                        name: link.name,
                        url: link.url,
                    })
                    .collect(),
                sources: self
                    .assets
                    .sources
                    .into_iter()
                    .map(|source| Source {
                        format: source.format,
                        url: source.url,
                    })
                    .collect(),
            },
        }
    }
}
