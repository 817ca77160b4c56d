//! Download Equation-of-State archives from the CompOSE catalog and verify
//! them against the published SHA-256.

pub mod config;
pub mod logging;

pub mod catalog;
pub mod checksum;
pub mod downloader;
pub mod error;
pub mod pipeline;
pub mod transport;
pub mod url_model;

pub use catalog::CatalogEntry;
pub use downloader::DownloadOutcome;
pub use error::{CatalogError, DownloadError, Error, TransportError};
pub use pipeline::Composer;
