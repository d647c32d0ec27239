//! Comma-separated cluster URL lists.
//!
//! A remote cluster is configured as one string naming any number of its
//! nodes, e.g. `"http://node1:8080/nifi, http://node2:8080/nifi"`. Each entry
//! is resolved to its base URL; duplicates collapse onto the first occurrence.

use crate::base_url::{resolve_base_url, InvalidUrlError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Failure to turn a cluster URL list into base URLs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterUrlsError {
    #[error("no cluster URL specified")]
    Empty,
    /// `index` is the entry's position in the comma-separated list.
    #[error("cluster URL at index {index} is invalid")]
    Invalid {
        index: usize,
        #[source]
        source: InvalidUrlError,
    },
}

/// Resolved, de-duplicated base URLs in configuration order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClusterUrls(Vec<String>);

impl ClusterUrls {
    /// Base URL of the first configured node.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: parsing rejects a list without entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ClusterUrls {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ClusterUrls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl FromStr for ClusterUrls {
    type Err = ClusterUrlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cluster_urls(s)
    }
}

/// Splits `raw` on `,`, skips blank entries and resolves the rest.
///
/// The first invalid entry aborts the whole list.
pub fn parse_cluster_urls(raw: &str) -> Result<ClusterUrls, ClusterUrlsError> {
    let mut urls: Vec<String> = Vec::new();
    for (index, entry) in raw.split(',').enumerate() {
        if entry.trim().is_empty() {
            continue;
        }
        let base = resolve_base_url(entry)
            .map_err(|source| ClusterUrlsError::Invalid { index, source })?;
        if !urls.contains(&base) {
            urls.push(base);
        }
    }
    if urls.is_empty() {
        return Err(ClusterUrlsError::Empty);
    }
    Ok(ClusterUrls(urls))
}
