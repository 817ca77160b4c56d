//! CLI command handlers, one per file.

mod download;
mod links;
mod verify;

pub use download::run_download;
pub use links::run_links;
pub use verify::run_verify;

use anyhow::Result;

/// Rejects an empty `--id` before anything touches the network.
fn require_id(id: &str) -> Result<()> {
    if id.is_empty() {
        anyhow::bail!("EOS ID is not specified");
    }
    Ok(())
}
