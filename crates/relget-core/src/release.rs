//! Release model shared by the forge client and the resolver.

use std::path::PathBuf;

/// A forge project, looked up by its namespaced path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

/// A tagged release of a project with its attached assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    pub project_id: u64,
    pub tag: String,
    pub assets: Assets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    /// Links attached to the release, in forge order
    pub links: Vec<Link>,
    /// Generated source archives, one per archive format in forge order
    pub sources: Vec<Source>,
}

/// A release-attached URL with a free-text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// A generated source archive (zip, tar.gz, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub format: String,
    pub url: String,
}

impl Assets {
    /// Source archive at `index`, if the forge produced that many formats.
    pub fn source(&self, index: usize) -> Option<&Source> {
        self.sources.get(index)
    }
}

/// Everything needed to fetch one release asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub project_name: String,
    pub release_tag: String,
    pub output_path: PathBuf,
    /// Position into the release's source archives
    pub format_index: usize,
    pub token: Option<String>,
}
