//! Final path segment of a URL.

use url::Url;

/// Returns the last non-empty path segment of `url`, like a file basename.
///
/// Trailing slashes are ignored (`/eos/1.0/eos.zip/` → `eos.zip`). Returns
/// `None` for the root path.
pub fn last_path_segment(url: &Url) -> Option<&str> {
    url.path().split('/').filter(|s| !s.is_empty()).last()
}
