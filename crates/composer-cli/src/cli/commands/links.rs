//! `composer links --id <ID>` – print where an EOS archive and its checksum live.

use anyhow::{Context, Result};
use composer_core::Composer;

pub fn run_links(composer: &Composer, id: &str) -> Result<()> {
    super::require_id(id)?;
    let entry = composer.resolve_entry(id).context("resolve EOS")?;
    println!("archive:  {}", entry.archive_url);
    println!("checksum: {}", entry.checksum_url);
    Ok(())
}
