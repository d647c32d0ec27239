//! `s2s resolve <URL>...` – print the base URL for each input.

use anyhow::{Context, Result};
use s2s_core::resolve_base_url;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    input: &'a str,
    base_url: String,
}

fn render(urls: &[String], json: bool) -> Result<String> {
    let mut resolved = Vec::with_capacity(urls.len());
    for input in urls {
        let base_url = resolve_base_url(input).with_context(|| format!("resolving {input:?}"))?;
        tracing::debug!(input = %input, base_url = %base_url, "resolved base URL");
        resolved.push(Resolved { input, base_url });
    }

    if json {
        return Ok(serde_json::to_string_pretty(&resolved)?);
    }
    Ok(resolved
        .into_iter()
        .map(|r| r.base_url)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_resolve(urls: &[String], json: bool) -> Result<()> {
    println!("{}", render(urls, json)?);
    Ok(())
}
