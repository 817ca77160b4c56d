//! `composer verify --id <ID>` – re-check an archive already on disk.

use anyhow::{Context, Result};
use composer_core::Composer;

pub fn run_verify(composer: &Composer, id: &str) -> Result<()> {
    super::require_id(id)?;
    let outcome = composer.verify_archive(id).context("verify EOS")?;
    println!("{}  {}  OK", outcome.digest, outcome.path.display());
    Ok(())
}
