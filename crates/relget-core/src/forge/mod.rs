//! Forge API access.

mod gitlab;

pub use gitlab::GitLabClient;

use crate::error::ForgeError;
use crate::release::{Project, Release};

/// Read-only lookups against a source forge.
pub trait Forge {
    /// Base URL of the forge, without a trailing slash.
    fn host(&self) -> &str;

    /// Look up a project by its namespaced path (e.g. "group/subgroup/repo").
    fn project(&self, name: &str) -> Result<Project, ForgeError>;

    /// Look up the release tagged `tag` of the given project.
    fn release(&self, project_id: u64, tag: &str) -> Result<Release, ForgeError>;
}
