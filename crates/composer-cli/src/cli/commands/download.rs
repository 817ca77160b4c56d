//! `composer download --id <ID>` – fetch and verify one EOS archive.

use anyhow::{Context, Result};
use composer_core::Composer;

pub fn run_download(composer: &Composer, id: &str) -> Result<()> {
    super::require_id(id)?;
    let outcome = composer.download_dataset(id).context("download EOS")?;
    println!(
        "Downloaded {} ({} bytes, sha256 {})",
        outcome.path.display(),
        outcome.bytes,
        outcome.digest
    );
    Ok(())
}
