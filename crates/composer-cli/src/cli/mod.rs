//! CLI for the CompOSE EOS downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use composer_core::config;
use composer_core::Composer;
use std::path::PathBuf;

use commands::{run_download, run_links, run_verify};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "composer")]
#[command(about = "Command-line tool for CompOSE", long_about = None)]
pub struct Cli {
    /// Catalog origin (overrides `base_url` from config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download EOS data archive from CompOSE and verify its SHA-256.
    Download {
        /// EOS ID.
        #[arg(long)]
        id: String,
        /// Directory for `eos_<id>.zip` (default: config `download_dir`, else current dir).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show the archive and checksum links of an EOS without downloading.
    Links {
        /// EOS ID.
        #[arg(long)]
        id: String,
    },

    /// Check an already downloaded `eos_<id>.zip` against the published SHA-256.
    Verify {
        /// EOS ID.
        #[arg(long)]
        id: String,
        /// Directory holding the archive (default: config `download_dir`, else current dir).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(base_url) = cli.base_url {
            cfg.base_url = base_url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download { id, output_dir } => {
                run_download(&composer(&cfg, output_dir)?, &id)?;
            }
            CliCommand::Links { id } => run_links(&composer(&cfg, None)?, &id)?,
            CliCommand::Verify { id, output_dir } => {
                run_verify(&composer(&cfg, output_dir)?, &id)?;
            }
        }

        Ok(())
    }
}

/// Pipeline for `cfg`, with `--output-dir` taking precedence over `download_dir`.
fn composer(cfg: &config::ComposerConfig, output_dir: Option<PathBuf>) -> Result<Composer> {
    let composer = Composer::from_config(cfg)?;
    Ok(match output_dir {
        Some(dir) => composer.with_download_dir(dir),
        None => composer,
    })
}

#[cfg(test)]
mod tests;
