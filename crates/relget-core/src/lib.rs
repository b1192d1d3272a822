pub mod error;
pub mod forge;
pub mod http;
pub mod release;
pub mod resolve;
pub mod service;
pub mod sink;
pub mod transfer;

pub use error::{DownloadError, ForgeError, ResolveError, Result, SinkError, Stage, TransferError};
pub use forge::{Forge, GitLabClient};
pub use http::HttpClientConfig;
pub use release::{Assets, DownloadRequest, Link, Project, Release, Source};
pub use resolve::{resolve, ProjectPattern};
pub use service::{DownloadSummary, ReleaseService};
pub use sink::{FileSink, SinkProvider};
pub use transfer::{HttpTransfer, NoProgress, ProgressReporter, Transfer};
