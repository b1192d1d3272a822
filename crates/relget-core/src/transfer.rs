//! Streaming asset download.

use std::io::{Read, Write};
use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::TransferError;

const CHUNK_SIZE: usize = 64 * 1024;

/// Receives download progress. Implementations render it however they like.
pub trait ProgressReporter: Send + Sync {
    /// Called once the response headers are in. `total` is the declared body length.
    fn begin(&self, total: Option<u64>);

    /// Called after each chunk has been written to the sink.
    fn advance(&self, bytes: u64);

    fn finish(&self);
}

/// Progress reporter that discards everything
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn begin(&self, _total: Option<u64>) {}
    fn advance(&self, _bytes: u64) {}
    fn finish(&self) {}
}

/// Fetches a single URL into a sink.
pub trait Transfer {
    /// Stream the body of `url` into `sink`, returning the number of bytes written.
    fn download(
        &self,
        url: &str,
        token: Option<&str>,
        sink: &mut dyn Write,
    ) -> Result<u64, TransferError>;
}

/// [`Transfer`] over a blocking reqwest client
pub struct HttpTransfer {
    client: Client,
    progress: Arc<dyn ProgressReporter>,
}

impl HttpTransfer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }
}

impl Transfer for HttpTransfer {
    fn download(
        &self,
        url: &str,
        token: Option<&str>,
        sink: &mut dyn Write,
    ) -> Result<u64, TransferError> {
        let mut request = self.client.get(url);

        // Some resolved URLs are public; only authenticate when we can.
        if let Some(token) = token {
            request = request.header("PRIVATE-TOKEN", token);
        }

        let mut response = request.send().map_err(TransferError::Request)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TransferError::Authentication {
                status: status.as_u16(),
            });
        }
        if status != StatusCode::OK {
            return Err(TransferError::Http {
                status: status.as_u16(),
            });
        }

        self.progress.begin(response.content_length());

        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;

        let result = loop {
            let n = match response.read(&mut buffer) {
                Ok(0) => break Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(TransferError::Network(e)),
            };

            if let Err(e) = sink.write_all(&buffer[..n]) {
                break Err(TransferError::Write(e));
            }

            written += n as u64;
            self.progress.advance(n as u64);
        };

        self.progress.finish();
        result?;

        sink.flush().map_err(TransferError::Write)?;

        log::info!("Downloaded {} bytes from {}", written, url);
        Ok(written)
    }
}
