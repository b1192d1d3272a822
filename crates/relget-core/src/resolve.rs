//! Download URL resolution.
//!
//! Releases on the forge carry their payload in several historically grown
//! shapes: generic packages, repository blob links, CI job artifacts,
//! uploads and generated source archives. [`resolve`] maps a release onto the
//! single URL that actually serves the artifact.
//!
//! A few projects publish in a fixed layout and are matched by name first
//! (see [`ProjectPattern`]); everything else goes through the generic policy,
//! which only ever looks at the first link.

use crate::error::ResolveError;
use crate::release::Release;

const INGEST_MODULE: &str = "dimag/ingest/ingestprozessmodul";
const ACCESS_MODULE: &str = "dimag/access/accessmodul";

/// Projects with a known publishing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPattern {
    /// Publishes `ipm.<tag>.zip` as a generic package
    IngestModule,
    /// Links its installer as a repository blob
    AccessModule,
    Generic,
}

impl ProjectPattern {
    /// Classify a project by its namespaced path, ignoring case.
    pub fn for_project(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            INGEST_MODULE => ProjectPattern::IngestModule,
            ACCESS_MODULE => ProjectPattern::AccessModule,
            _ => ProjectPattern::Generic,
        }
    }
}

/// Compute the download URL for `release` of `project_name`.
///
/// `host` is the forge base URL without trailing slash. `format_index`
/// selects a source archive by position and may be out of range.
pub fn resolve(
    host: &str,
    project_name: &str,
    release: &Release,
    format_index: usize,
) -> Result<String, ResolveError> {
    match ProjectPattern::for_project(project_name) {
        ProjectPattern::IngestModule => Ok(ingest_url(host, release)),
        ProjectPattern::AccessModule => access_url(host, project_name, release),
        ProjectPattern::Generic => generic_url(host, project_name, release, format_index),
    }
}

fn ingest_url(host: &str, release: &Release) -> String {
    format!(
        "{}/api/v4/projects/{}/packages/generic/releases/{}/ipm.{}.zip",
        host, release.project_id, release.tag, release.tag
    )
}

/// `<host>/<project>/-/blob/<ref>/<file>` -> raw file API URL.
fn access_url(host: &str, project_name: &str, release: &Release) -> Result<String, ResolveError> {
    let link = release
        .assets
        .links
        .iter()
        .find(|link| link.name.to_lowercase().contains("access"))
        .ok_or(ResolveError::NotFound)?;

    let blob_prefix = format!("{}/{}/-/blob/", host, project_name);
    let path = link
        .url
        .strip_prefix(&blob_prefix)
        .ok_or(ResolveError::NotFound)?;

    let (git_ref, file_path) = path.split_once('/').ok_or(ResolveError::NotFound)?;

    Ok(format!(
        "{}/api/v4/projects/{}/repository/files/{}/raw?ref={}",
        host, release.project_id, file_path, git_ref
    ))
}

fn generic_url(
    host: &str,
    project_name: &str,
    release: &Release,
    format_index: usize,
) -> Result<String, ResolveError> {
    let assets = &release.assets;
    let source_url = || assets.source(format_index).map(|source| source.url.clone());

    let Some(link) = assets.links.first() else {
        return source_url().ok_or(ResolveError::NotFound);
    };
    let url = link.url.as_str();

    if url.contains("artifacts") {
        // <host>/<project>/-/jobs/<id>/artifacts/download -> <host>/api/v4/projects/<id>/jobs/<id>/artifacts
        let web_prefix = format!("{}/{}/-/", host, project_name);
        let api_prefix = format!("{}/api/v4/projects/{}/", host, release.project_id);
        let rewritten = url.replacen(&web_prefix, &api_prefix, 1);
        let rewritten = rewritten
            .strip_suffix("/download")
            .unwrap_or(&rewritten)
            .to_string();
        return Ok(rewritten);
    }

    // Uploads are not fetchable directly; the chosen source archive is the payload.
    if url.contains("uploads") {
        if let Some(source) = source_url() {
            return Ok(source);
        }
    }

    Ok(url.to_string())
}
