//! Request URLs built on top of a resolved base URL.

/// Site-to-site root resource.
pub const SITE_TO_SITE: &str = "/site-to-site";
/// Controller details of the remote instance.
pub const CONTROLLER: &str = "/controller";
/// Peer list used for load balancing across cluster nodes.
pub const PEERS: &str = "/site-to-site/peers";

/// Joins `base` and `resource` with exactly one `/` between them.
///
/// `base` is expected to come from [`resolve_base_url`](crate::base_url::resolve_base_url);
/// it is not re-parsed.
pub fn resource_url(base: &str, resource: &str) -> String {
    let base = base.trim_end_matches('/');
    let resource = resource.trim_start_matches('/');
    if resource.is_empty() {
        return base.to_string();
    }
    format!("{base}/{resource}")
}
