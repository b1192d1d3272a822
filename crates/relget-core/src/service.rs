//! Release download pipeline.
//!
//! [`ReleaseService`] runs one download strictly in sequence:
//!
//! ```text
//! project lookup -> release lookup -> URL resolution -> open sink -> transfer
//! ```
//!
//! The first failing stage ends the run; its error is tagged with the stage
//! (see [`crate::error::Stage`]). A partially written output file is left in
//! place.

use crate::error::{DownloadError, Result};
use crate::forge::Forge;
use crate::release::DownloadRequest;
use crate::resolve::resolve;
use crate::sink::SinkProvider;
use crate::transfer::Transfer;

/// Outcome of a successful download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub url: String,
    pub bytes: u64,
}

pub struct ReleaseService<F, T, S> {
    forge: F,
    transfer: T,
    sink: S,
}

impl<F, T, S> ReleaseService<F, T, S>
where
    F: Forge,
    T: Transfer,
    S: SinkProvider,
{
    pub fn new(forge: F, transfer: T, sink: S) -> Self {
        Self {
            forge,
            transfer,
            sink,
        }
    }

    pub fn forge(&self) -> &F {
        &self.forge
    }

    /// Download the asset of `request` to its output path.
    pub fn download_release(&self, request: &DownloadRequest) -> Result<DownloadSummary> {
        let project = self
            .forge
            .project(&request.project_name)
            .map_err(DownloadError::Project)?;
        log::debug!("Resolved project {} to id {}", request.project_name, project.id);

        let release = self
            .forge
            .release(project.id, &request.release_tag)
            .map_err(DownloadError::Release)?;
        log::debug!(
            "Release {} has {} links and {} sources",
            release.tag,
            release.assets.links.len(),
            release.assets.sources.len()
        );

        let url = resolve(
            self.forge.host(),
            &request.project_name,
            &release,
            request.format_index,
        )
        .map_err(DownloadError::NoDownloadUrl)?;
        log::debug!("Download URL: {}", url);

        let mut handle = self
            .sink
            .create(&request.output_path)
            .map_err(DownloadError::CreateOutput)?;
        log::debug!("Writing to {}", request.output_path.display());

        // `handle` is dropped, and the file closed, on both paths out of here.
        let bytes = self
            .transfer
            .download(&url, request.token.as_deref(), &mut handle)
            .map_err(DownloadError::Download)?;

        Ok(DownloadSummary { url, bytes })
    }
}
