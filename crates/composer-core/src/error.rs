//! Error taxonomy for the fetch → parse → download → verify pipeline.
//!
//! Each pipeline stage has its own error type; [`Error`] wraps them with the
//! stage that failed so `{:#}` renders "stage: cause" chains.

use std::io;
use std::path::PathBuf;

/// Failure of a single HTTP GET.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// libcurl failed before a response head arrived (DNS, refused, timeout, bad URL).
    #[error("GET {url}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response status was not 200.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },
    /// Response head arrived but reading the body failed.
    #[error("GET {url}: reading body")]
    BodyRead {
        url: String,
        #[source]
        source: curl::Error,
    },
}

impl TransportError {
    /// HTTP status, if the error came from a non-200 response.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransportError::HttpStatus { status, .. } => Some(*status),
            TransportError::Network { .. } | TransportError::BodyRead { .. } => None,
        }
    }
}

/// Failure to locate dataset links on a catalog page.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no EOS data found (missing {missing} link)")]
    NoDataFound { missing: &'static str },
}

/// Failure while streaming the archive to disk.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Request failed before any local file was touched.
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("create file {}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Source read or sink write failed mid-stream; `path` holds partial data.
    #[error("copy data to {}", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Terminal failure of [`crate::pipeline::Composer::download_dataset`] and
/// [`crate::pipeline::Composer::verify_archive`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("download page")]
    PageFetch(#[source] TransportError),
    #[error("parse EOS page")]
    PageParse(#[source] CatalogError),
    #[error("download EOS data")]
    ArchiveDownload(#[source] DownloadError),
    #[error("download checksum")]
    ChecksumFetch(#[source] TransportError),
    /// Archive to re-check could not be read (missing, unreadable).
    #[error("read archive {}", .path.display())]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Archive at `path` is kept on disk for inspection.
    #[error("checksum mismatch for {}: expected {expected:?}, got {actual}", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
