use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::transport::DEFAULT_USER_AGENT;

/// Public CompOSE catalog.
pub const DEFAULT_BASE_URL: &str = "https://compose.obspm.fr";

/// Global configuration loaded from `~/.config/composer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Catalog origin; dataset pages live at `<base_url>/eos/<id>`.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Where archives are written. Current directory when unset.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            download_dir: None,
        }
    }
}

impl ComposerConfig {
    /// `base_url` parsed; fails on anything that isn't an absolute URL.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base_url {:?}", self.base_url))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("composer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ComposerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ComposerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ComposerConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ComposerConfig::default();
        assert_eq!(cfg.base_url, "https://compose.obspm.fr");
        assert!(cfg.user_agent.starts_with("composer/"));
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.base_url().unwrap().host_str(), Some("compose.obspm.fr"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ComposerConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ComposerConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.download_dir, cfg.download_dir);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "http://127.0.0.1:8080"
            user_agent = "eos-mirror/1"
            download_dir = "/data/eos"
        "#;
        let cfg: ComposerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.user_agent, "eos-mirror/1");
        assert_eq!(cfg.download_dir, Some(PathBuf::from("/data/eos")));
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let cfg: ComposerConfig = toml::from_str(r#"base_url = "https://example.org""#).unwrap();
        assert!(cfg.user_agent.starts_with("composer/"));
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn invalid_base_url_rejected() {
        let cfg = ComposerConfig {
            base_url: "compose.obspm.fr".into(),
            ..ComposerConfig::default()
        };
        assert!(cfg.base_url().is_err());
    }
}
