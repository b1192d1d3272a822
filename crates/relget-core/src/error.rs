use std::path::PathBuf;

use thiserror::Error;

/// Failure while talking to the forge API (project or release lookup).
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// No download URL could be derived from the release assets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no asset matches the release layout")]
    NotFound,
}

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("authentication failed (HTTP {status}): please provide a valid GitLab token")]
    Authentication { status: u16 },

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("error reading response body: {0}")]
    Network(#[source] std::io::Error),

    #[error("error writing to output: {0}")]
    Write(#[source] std::io::Error),
}

impl TransferError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, TransferError::Authentication { .. })
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to create file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pipeline stage at which a download failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Project,
    Release,
    Resolve,
    CreateOutput,
    Download,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Project => "failed to get project",
            Stage::Release => "failed to get release",
            Stage::Resolve => "no download URL found",
            Stage::CreateOutput => "failed to create output file",
            Stage::Download => "download failed",
        }
    }
}

/// Stage-tagged failure returned by [`crate::ReleaseService::download_release`].
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("{label}: {0}", label = Stage::Project.label())]
    Project(#[source] ForgeError),

    #[error("{label}: {0}", label = Stage::Release.label())]
    Release(#[source] ForgeError),

    #[error("{label}", label = Stage::Resolve.label())]
    NoDownloadUrl(#[source] ResolveError),

    #[error("{label}: {0}", label = Stage::CreateOutput.label())]
    CreateOutput(#[source] SinkError),

    #[error("{label}: {0}", label = Stage::Download.label())]
    Download(#[source] TransferError),
}

impl DownloadError {
    pub fn stage(&self) -> Stage {
        match self {
            DownloadError::Project(_) => Stage::Project,
            DownloadError::Release(_) => Stage::Release,
            DownloadError::NoDownloadUrl(_) => Stage::Resolve,
            DownloadError::CreateOutput(_) => Stage::CreateOutput,
            DownloadError::Download(_) => Stage::Download,
        }
    }
}

pub type Result<T> = std::result::Result<T, DownloadError>;
