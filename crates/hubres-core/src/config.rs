use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::url_pattern::UrlPattern;

/// Environment variable overriding the catalog base URL.
pub const HUB_API_ENV: &str = "HUB_API";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid hub base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("locate XDG config dir: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

/// Resolver configuration, from `~/.config/hubres/config.toml` and `HUB_API`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Catalog base URL (e.g. `https://hub.example.com/`). None = public Hub.
    #[serde(default)]
    pub hub_api: Option<String>,
}

impl HubConfig {
    /// Applies overrides from an environment lookup. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(HUB_API_ENV).filter(|v| !v.trim().is_empty()) {
            self.hub_api = Some(v);
        }
    }

    /// Builds the lookup pattern. The override must be an absolute http(s) URL.
    pub fn url_pattern(&self) -> Result<UrlPattern, ConfigError> {
        let base = match self.hub_api.as_deref().map(str::trim) {
            None | Some("") => return Ok(UrlPattern::default_hub()),
            Some(b) => b,
        };
        let parsed = url::Url::parse(base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: base.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(UrlPattern::with_base(base))
    }
}

/// Location of the config file if one exists.
pub fn config_path() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hubres")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parses a config file.
pub fn load_from(path: &Path) -> Result<HubConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path` (if given), then applies overrides from `lookup`.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<HubConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match path {
        Some(path) => {
            let cfg = load_from(path)?;
            tracing::debug!("loaded config from {}", path.display());
            cfg
        }
        None => HubConfig::default(),
    };
    cfg.apply_env(lookup);
    Ok(cfg)
}
