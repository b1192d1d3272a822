//! Output destinations.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::SinkError;

/// Opens the writable destination for a download.
///
/// The returned handle is owned by the caller and closed when dropped.
pub trait SinkProvider {
    type Handle: Write;

    fn create(&self, path: &Path) -> Result<Self::Handle, SinkError>;
}

/// Writes downloads to the local filesystem.
///
/// Parent directories are not created; an existing file is truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl SinkProvider for FileSink {
    type Handle = File;

    fn create(&self, path: &Path) -> Result<File, SinkError> {
        File::create(path).map_err(|source| SinkError::Create {
            path: path.to_path_buf(),
            source,
        })
    }
}
