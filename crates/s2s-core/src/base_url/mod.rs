//! Base URL resolution.
//!
//! Turns an operator-supplied URL (possibly with stray whitespace, trailing
//! slashes, or pointing at the UI path) into the canonical REST API base URL
//! that resource paths are appended to.

mod authority;
mod error;
mod segments;

pub use error::InvalidUrlError;
pub use segments::{with_api_suffix, API_SEGMENT, UI_SEGMENT};

use url::Url;

/// Resolves `raw` into a canonical `http(s)://host[:port]/.../nifi-api` URL.
///
/// Edge whitespace is trimmed, empty path segments and trailing slashes are
/// dropped, and the last segment is normalized: `nifi` becomes `nifi-api`,
/// `nifi-api` is kept, anything else gets `nifi-api` appended. Scheme, host
/// and port are kept as written. `.` and `..` segments are resolved the way
/// the `url` crate resolves them. Query and fragment are discarded. The result
/// has no trailing slash.
///
/// # Examples
///
/// - `resolve_base_url("http://nifi.example.com/nifi")` → `"http://nifi.example.com/nifi-api"`
/// - `resolve_base_url(" http://localhost:8080/nifi/ ")` → `"http://localhost:8080/nifi-api"`
/// - `resolve_base_url("http://localhost:8080/some/path")` → `"http://localhost:8080/some/path/nifi-api"`
pub fn resolve_base_url(raw: &str) -> Result<String, InvalidUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidUrlError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|source| InvalidUrlError::Parse {
        input: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(InvalidUrlError::UnsupportedScheme {
                input: trimmed.to_string(),
                scheme: other.to_string(),
            })
        }
    }

    let mut base = authority::origin(&parsed, trimmed)?;
    let segments = with_api_suffix(parsed.path_segments().into_iter().flatten());

    for segment in segments {
        base.push('/');
        base.push_str(segment);
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_http() {
        assert_eq!(
            resolve_base_url("http://nifi.example.com/nifi").unwrap(),
            "http://nifi.example.com/nifi-api"
        );
    }

    #[test]
    fn resolve_http_sub_path() {
        assert_eq!(
            resolve_base_url("http://nifi.example.com/foo/bar/baz/nifi").unwrap(),
            "http://nifi.example.com/foo/bar/baz/nifi-api"
        );
    }

    #[test]
    fn resolve_http_port() {
        assert_eq!(
            resolve_base_url("http://nifi.example.com:8080/nifi").unwrap(),
            "http://nifi.example.com:8080/nifi-api"
        );
    }

    #[test]
    fn resolve_https() {
        assert_eq!(
            resolve_base_url("https://nifi.example.com/nifi").unwrap(),
            "https://nifi.example.com/nifi-api"
        );
        assert_eq!(
            resolve_base_url("https://nifi.example.com:8443/nifi").unwrap(),
            "https://nifi.example.com:8443/nifi-api"
        );
    }

    #[test]
    fn query_and_fragment_dropped() {
        assert_eq!(
            resolve_base_url("http://localhost:8080/nifi?x=1#frag").unwrap(),
            "http://localhost:8080/nifi-api"
        );
    }

    #[test]
    fn scheme_case_preserved() {
        assert_eq!(
            resolve_base_url("HTTPS://localhost:8443/nifi").unwrap(),
            "HTTPS://localhost:8443/nifi-api"
        );
    }

    #[test]
    fn host_case_preserved() {
        assert_eq!(
            resolve_base_url("http://NiFi.Example.COM:8080/nifi").unwrap(),
            "http://NiFi.Example.COM:8080/nifi-api"
        );
    }

    #[test]
    fn backslash_path_is_not_a_port() {
        assert_eq!(
            resolve_base_url("http://host\\x:80").unwrap(),
            "http://host/x:80/nifi-api"
        );
    }

    #[test]
    fn dot_segments_are_resolved() {
        assert_eq!(
            resolve_base_url("http://host/a/../b/./nifi").unwrap(),
            "http://host/b/nifi-api"
        );
    }

    #[test]
    fn empty_and_blank_rejected() {
        assert_eq!(resolve_base_url(""), Err(InvalidUrlError::Empty));
        assert_eq!(resolve_base_url(" \t\n"), Err(InvalidUrlError::Empty));
    }

    #[test]
    fn relative_or_schemeless_rejected() {
        assert!(matches!(
            resolve_base_url("nifi.example.com/nifi"),
            Err(InvalidUrlError::Parse { .. })
        ));
        assert!(matches!(
            resolve_base_url("/nifi"),
            Err(InvalidUrlError::Parse { .. })
        ));
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(matches!(
            resolve_base_url("ftp://nifi.example.com/nifi"),
            Err(InvalidUrlError::UnsupportedScheme { .. })
        ));
        // Parses with scheme "localhost".
        assert!(matches!(
            resolve_base_url("localhost:8080"),
            Err(InvalidUrlError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn missing_host_rejected() {
        assert!(matches!(
            resolve_base_url("http://"),
            Err(InvalidUrlError::Parse { .. })
        ));
        assert!(matches!(
            resolve_base_url("http://:8080/nifi"),
            Err(InvalidUrlError::Parse { .. })
        ));
    }
}
