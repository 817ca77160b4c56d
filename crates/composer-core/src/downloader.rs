//! Streaming archive download with inline SHA-256.
//!
//! Each body chunk goes to the destination file and then to the hasher
//! before libcurl delivers the next one, so memory stays bounded by the
//! chunk size whatever the archive size.

use crate::error::{DownloadError, TransportError};
use crate::transport::{StreamError, Transport};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What was written to disk by [`download_and_hash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the bytes written (64 chars).
    pub digest: String,
    pub bytes: u64,
}

/// Destination file plus hasher. The file is created on the first chunk and
/// closed when this value is dropped.
struct HashingFile<'a> {
    path: &'a Path,
    file: Option<File>,
    hasher: Sha256,
    written: u64,
}

impl<'a> HashingFile<'a> {
    fn new(path: &'a Path) -> Self {
        Self {
            path,
            file: None,
            hasher: Sha256::new(),
            written: 0,
        }
    }

    fn is_created(&self) -> bool {
        self.file.is_some()
    }

    fn create(&mut self) -> Result<&mut File, DownloadError> {
        let path = self.path;
        let file = match self.file {
            Some(ref mut file) => file,
            None => {
                let file = File::create(path).map_err(|source| DownloadError::FileCreate {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::debug!("created {}", path.display());
                self.file.insert(file)
            }
        };
        Ok(file)
    }

    fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), DownloadError> {
        let path = self.path;
        self.create()?
            .write_all(chunk)
            .map_err(|source| DownloadError::Copy {
                path: path.to_path_buf(),
                source,
            })?;
        self.hasher.update(chunk);
        self.written += chunk.len() as u64;
        Ok(())
    }

    fn finish(mut self) -> Result<DownloadOutcome, DownloadError> {
        // An empty 200 body still yields an (empty) file.
        let path = self.path;
        self.create()?.flush().map_err(|source| DownloadError::Copy {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DownloadOutcome {
            path: path.to_path_buf(),
            digest: hex::encode(self.hasher.finalize()),
            bytes: self.written,
        })
    }
}

/// Downloads `url` to `dest` (created or truncated) and returns the SHA-256
/// of the bytes written.
///
/// A non-200 response or a failed connection returns before `dest` is
/// touched. Once a 200 response head has arrived, any failure is a
/// [`DownloadError::Copy`] and leaves the (possibly empty) partial file on
/// disk; callers must not reuse it.
pub fn download_and_hash(
    transport: &Transport,
    url: &str,
    dest: &Path,
) -> Result<DownloadOutcome, DownloadError> {
    let mut sink = HashingFile::new(dest);
    match transport.fetch_stream(url, |chunk| sink.write_chunk(chunk)) {
        Ok(()) => {}
        Err(StreamError::Sink(e)) => return Err(e),
        // A 200 head arrived, so the stream was open: the destination exists
        // even if the body broke before its first byte.
        Err(StreamError::Transport(e))
            if sink.is_created() || matches!(e, TransportError::BodyRead { .. }) =>
        {
            sink.create()?;
            return Err(DownloadError::Copy {
                path: dest.to_path_buf(),
                source: io::Error::other(e),
            });
        }
        Err(StreamError::Transport(e)) => return Err(e.into()),
    }
    let outcome = sink.finish()?;
    tracing::debug!(
        "wrote {} bytes to {} (sha256 {})",
        outcome.bytes,
        outcome.path.display(),
        outcome.digest
    );
    Ok(outcome)
}
