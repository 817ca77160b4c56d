//! SHA-256 digests: the published reference and local files.

use crate::error::TransportError;
use crate::transport::Transport;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Downloads the checksum file at `url` and returns its digest token.
///
/// Checksum files read `<digest> <filename>`. The token is not checked for
/// being hex; a malformed file just fails the later comparison.
pub fn fetch_expected_digest(transport: &Transport, url: &str) -> Result<String, TransportError> {
    let text = transport.fetch_text(url)?;
    Ok(digest_token(&text).to_string())
}

/// First whitespace-separated token of `text`, or `""` if there is none.
pub fn digest_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// Digest and length of the file at `path`, read through a fixed buffer.
///
/// Used to re-check an archive already on disk, e.g. one kept after a
/// checksum mismatch.
pub fn hash_file(path: &Path) -> io::Result<(String, u64)> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let len = io::copy(&mut file, &mut hasher)?;
    Ok((hex::encode(hasher.finalize()), len))
}
