//! URL helpers and local filename derivation.
//!
//! The archive for dataset `<id>` is saved as `eos_<id>.zip`, with the ID
//! made safe for use as a single path component.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_path_component;

const ARCHIVE_PREFIX: &str = "eos_";
const ARCHIVE_SUFFIX: &str = ".zip";

/// Local filename for the archive of dataset `id`.
///
/// # Examples
///
/// - `archive_filename("1.0")` → `"eos_1.0.zip"`
/// - `archive_filename("a/b")` → `"eos_a_b.zip"`
pub fn archive_filename(id: &str) -> String {
    let budget = 255 - ARCHIVE_PREFIX.len() - ARCHIVE_SUFFIX.len();
    format!(
        "{}{}{}",
        ARCHIVE_PREFIX,
        sanitize_path_component(id, budget),
        ARCHIVE_SUFFIX
    )
}
