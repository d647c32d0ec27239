pub mod base_url;
pub mod cluster;
pub mod config;
pub mod logging;
pub mod resource;

pub use base_url::{resolve_base_url, InvalidUrlError};
pub use cluster::{parse_cluster_urls, ClusterUrls, ClusterUrlsError};
pub use resource::resource_url;
