//! Dataset download pipeline.
//!
//! `Start → PageFetched → EntryParsed → ArchiveDownloaded → DigestFetched →
//! Verified`, strictly in order. The first failure ends the run; nothing is
//! retried and nothing on disk is cleaned up.

use crate::catalog::{self, CatalogEntry};
use crate::checksum::{fetch_expected_digest, hash_file};
use crate::config::ComposerConfig;
use crate::downloader::{download_and_hash, DownloadOutcome};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::url_model::archive_filename;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads and verifies datasets from one catalog.
#[derive(Debug, Clone)]
pub struct Composer {
    transport: Transport,
    base_url: Url,
    download_dir: PathBuf,
}

impl Composer {
    /// Catalog at `base_url`; archives go to the current directory.
    pub fn new(base_url: Url, transport: Transport) -> Self {
        Self {
            transport,
            base_url,
            download_dir: PathBuf::from("."),
        }
    }

    pub fn from_config(cfg: &ComposerConfig) -> anyhow::Result<Self> {
        let composer = Self::new(cfg.base_url()?, Transport::new(cfg.user_agent.clone()));
        Ok(match &cfg.download_dir {
            Some(dir) => composer.with_download_dir(dir),
            None => composer,
        })
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Where the archive of dataset `id` is written.
    pub fn archive_path(&self, id: &str) -> PathBuf {
        self.download_dir.join(archive_filename(id))
    }

    /// Fetches and parses the catalog page of `id` without downloading anything else.
    pub fn resolve_entry(&self, id: &str) -> Result<CatalogEntry> {
        if id.is_empty() {
            return Err(Error::InvalidArgument("EOS ID is not specified".into()));
        }

        let page_url = catalog::catalog_url(&self.base_url, id);
        tracing::info!("fetching catalog page {}", page_url);
        let page = self
            .transport
            .fetch_text(&page_url)
            .map_err(Error::PageFetch)?;

        // The ID goes into the URL verbatim; if that doesn't parse, resolve
        // hrefs against the catalog origin instead.
        let join_base = Url::parse(&page_url).unwrap_or_else(|_| self.base_url.clone());
        let entry = catalog::parse_catalog_page(&page, &join_base, &self.base_url)
            .map_err(Error::PageParse)?;
        tracing::info!("found EOS data for {}", id);
        tracing::debug!("archive {} checksum {}", entry.archive_url, entry.checksum_url);
        Ok(entry)
    }

    /// Downloads dataset `id` to [`Self::archive_path`] and verifies it
    /// against the published SHA-256.
    ///
    /// The archive stays on disk on every failure after the download started,
    /// including [`Error::ChecksumMismatch`].
    pub fn download_dataset(&self, id: &str) -> Result<DownloadOutcome> {
        let entry = self.resolve_entry(id)?;

        let dest = self.archive_path(id);
        tracing::info!("downloading {} to {}", entry.archive_url, dest.display());
        let outcome = download_and_hash(&self.transport, entry.archive_url.as_str(), &dest)
            .map_err(Error::ArchiveDownload)?;

        self.check_against_published(&entry, outcome)
    }

    /// Re-checks an archive already on disk at [`Self::archive_path`] against
    /// the published SHA-256, without downloading it again.
    pub fn verify_archive(&self, id: &str) -> Result<DownloadOutcome> {
        let entry = self.resolve_entry(id)?;

        let path = self.archive_path(id);
        tracing::info!("hashing {}", path.display());
        let (digest, bytes) = hash_file(&path).map_err(|source| Error::ArchiveRead {
            path: path.clone(),
            source,
        })?;

        self.check_against_published(&entry, DownloadOutcome { path, digest, bytes })
    }

    fn check_against_published(
        &self,
        entry: &CatalogEntry,
        outcome: DownloadOutcome,
    ) -> Result<DownloadOutcome> {
        let expected = fetch_expected_digest(&self.transport, entry.checksum_url.as_str())
            .map_err(Error::ChecksumFetch)?;

        if outcome.digest != expected {
            tracing::warn!(
                "checksum mismatch for {}: expected {:?}, got {}",
                outcome.path.display(),
                expected,
                outcome.digest
            );
            return Err(Error::ChecksumMismatch {
                path: outcome.path,
                expected,
                actual: outcome.digest,
            });
        }

        tracing::info!(
            "verified {} ({} bytes, sha256 {})",
            outcome.path.display(),
            outcome.bytes,
            outcome.digest
        );
        Ok(outcome)
    }
}
