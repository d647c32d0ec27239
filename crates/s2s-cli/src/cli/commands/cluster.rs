//! `s2s cluster <URLS>` – resolve a comma-separated node list.

use anyhow::{Context, Result};
use s2s_core::cluster::{parse_cluster_urls, ClusterUrls};

fn render(urls: &ClusterUrls, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(urls)?);
    }
    Ok(urls
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_cluster(raw: &str, json: bool) -> Result<()> {
    let urls = parse_cluster_urls(raw).with_context(|| format!("cluster URLs {raw:?}"))?;
    tracing::debug!(count = urls.len(), "resolved cluster URLs");
    println!("{}", render(&urls, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_dedups() {
        let urls = parse_cluster_urls("http://a/nifi, http://a, http://b:8080").unwrap();
        assert_eq!(
            render(&urls, false).unwrap(),
            "http://a/nifi-api\nhttp://b:8080/nifi-api"
        );
    }

    #[test]
    fn json_output_is_string_array() {
        let urls = parse_cluster_urls("https://a:8443/nifi").unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&urls, true).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!(["https://a:8443/nifi-api"]));
    }

    #[test]
    fn empty_list_is_error() {
        assert!(run_cluster(" , ", false).is_err());
    }
}
