//! Tests for download, links and verify subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_download() {
    match parse(&["composer", "download", "--id", "1.0"]).command {
        CliCommand::Download { id, output_dir } => {
            assert_eq!(id, "1.0");
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_output_dir() {
    match parse(&["composer", "download", "--id", "42", "--output-dir", "/tmp"]).command {
        CliCommand::Download { id, output_dir } => {
            assert_eq!(id, "42");
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp")));
        }
        _ => panic!("expected Download with --output-dir"),
    }
}

#[test]
fn cli_parse_download_requires_id() {
    assert!(Cli::try_parse_from(["composer", "download"]).is_err());
}

#[test]
fn cli_parse_download_empty_id_reaches_handler() {
    // clap accepts `--id ""`; the handler rejects it before any request.
    match parse(&["composer", "download", "--id", ""]).command {
        CliCommand::Download { id, .. } => assert!(id.is_empty()),
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_links() {
    match parse(&["composer", "links", "--id", "7"]).command {
        CliCommand::Links { id } => assert_eq!(id, "7"),
        _ => panic!("expected Links"),
    }
}

#[test]
fn cli_parse_verify() {
    match parse(&["composer", "verify", "--id", "1.0"]).command {
        CliCommand::Verify { id, output_dir } => {
            assert_eq!(id, "1.0");
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_output_dir() {
    match parse(&["composer", "verify", "--id", "2", "--output-dir", "/data/eos"]).command {
        CliCommand::Verify { output_dir, .. } => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("/data/eos")));
        }
        _ => panic!("expected Verify with --output-dir"),
    }
}

#[test]
fn cli_parse_verify_requires_id() {
    assert!(Cli::try_parse_from(["composer", "verify"]).is_err());
}

#[test]
fn cli_parse_global_base_url() {
    let cli = parse(&[
        "composer",
        "download",
        "--id",
        "1",
        "--base-url",
        "http://127.0.0.1:8080",
    ]);
    assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    let cli = parse(&["composer", "--base-url", "http://mirror", "links", "--id", "1"]);
    assert_eq!(cli.base_url.as_deref(), Some("http://mirror"));
}

#[test]
fn cli_parse_no_base_url_by_default() {
    assert!(parse(&["composer", "links", "--id", "x"]).base_url.is_none());
}

#[test]
fn empty_id_rejected_by_handler() {
    let cfg = composer_core::config::ComposerConfig::default();
    let composer = composer_core::Composer::from_config(&cfg).unwrap();
    let err = crate::cli::commands::run_download(&composer, "").unwrap_err();
    assert_eq!(err.to_string(), "EOS ID is not specified");
    let err = crate::cli::commands::run_verify(&composer, "").unwrap_err();
    assert_eq!(err.to_string(), "EOS ID is not specified");
}

#[test]
fn output_dir_overrides_config() {
    let mut cfg = composer_core::config::ComposerConfig::default();
    cfg.download_dir = Some("/from/config".into());
    let c = crate::cli::composer(&cfg, None).unwrap();
    assert_eq!(c.download_dir(), Path::new("/from/config"));
    let c = crate::cli::composer(&cfg, Some("/from/flag".into())).unwrap();
    assert_eq!(c.download_dir(), Path::new("/from/flag"));
}
