//! `s2s check` – resolve every cluster URL in the config file.

use anyhow::{Context, Result};
use s2s_core::config::{self, S2sConfig};
use std::path::{Path, PathBuf};

fn render(cfg: &S2sConfig, path: &Path) -> Result<String> {
    if cfg.cluster_urls.is_empty() {
        return Ok(format!("No cluster URLs configured in {}.", path.display()));
    }
    let urls = cfg
        .resolved_urls()
        .with_context(|| format!("cluster_urls in {}", path.display()))?;
    let mut out = String::new();
    for url in &urls {
        tracing::debug!(base_url = %url, "configured cluster node");
        out.push_str(url);
        out.push('\n');
    }
    out.pop();
    Ok(out)
}

pub fn run_check(config_file: Option<&Path>) -> Result<()> {
    let (cfg, path): (S2sConfig, PathBuf) = match config_file {
        Some(p) => (config::load_from(p)?, p.to_path_buf()),
        None => (config::load_or_init()?, config::config_path()?),
    };
    tracing::debug!("loaded config: {:?}", cfg);
    println!("{}", render(&cfg, &path)?);
    Ok(())
}
