use crate::cluster::{parse_cluster_urls, ClusterUrls, ClusterUrlsError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/s2s/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S2sConfig {
    /// Remote cluster node URLs as entered by the operator. An entry may
    /// itself be a comma-separated list.
    #[serde(default)]
    pub cluster_urls: Vec<String>,
}

impl S2sConfig {
    /// Resolves every configured entry to its base URL, de-duplicated across
    /// entries. Error indices count entries after comma-splitting.
    pub fn resolved_urls(&self) -> Result<ClusterUrls, ClusterUrlsError> {
        parse_cluster_urls(&self.cluster_urls.join(","))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s2s")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<S2sConfig> {
    let path = config_path()?;
    if !path.exists() {
        return init_at(&path);
    }
    load_from(&path)
}

/// Writes the default configuration to `path` and returns it.
pub fn init_at(path: &Path) -> Result<S2sConfig> {
    let default_cfg = S2sConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

pub fn load_from(path: &Path) -> Result<S2sConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: S2sConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
