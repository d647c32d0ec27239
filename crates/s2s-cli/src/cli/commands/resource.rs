//! `s2s resource <BASE> <RESOURCE>` – print a resource request URL.

use anyhow::{Context, Result};
use s2s_core::{resolve_base_url, resource_url};

fn render(base: &str, resource: &str) -> Result<String> {
    let base = resolve_base_url(base).with_context(|| format!("resolving {base:?}"))?;
    Ok(resource_url(&base, resource))
}

pub fn run_resource(base: &str, resource: &str) -> Result<()> {
    println!("{}", render(base, resource)?);
    Ok(())
}
