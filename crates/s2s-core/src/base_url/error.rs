//! Error returned when a configured URL cannot be turned into a base URL.

/// Why a raw URL was rejected by [`resolve_base_url`](super::resolve_base_url).
///
/// Every variant carries the trimmed input so callers can report which
/// configured entry was at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrlError {
    /// Nothing left after trimming whitespace.
    #[error("URL is empty")]
    Empty,
    /// The `url` crate could not parse the input as an absolute URL.
    #[error("invalid URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Parsed, but the scheme is not `http` or `https`.
    #[error("unsupported scheme {scheme:?} in {input:?} (expected http or https)")]
    UnsupportedScheme { input: String, scheme: String },
    /// No `//host` part.
    #[error("URL has no host: {input:?}")]
    MissingAuthority { input: String },
    #[error("user info is not allowed in a base URL: {input:?}")]
    UserInfo { input: String },
    #[error("IPv6 literal hosts are not supported: {input:?}")]
    Ipv6Host { input: String },
}

impl InvalidUrlError {
    /// The trimmed input that was rejected (empty for [`InvalidUrlError::Empty`]).
    pub fn input(&self) -> &str {
        match self {
            InvalidUrlError::Empty => "",
            InvalidUrlError::Parse { input, .. }
            | InvalidUrlError::UnsupportedScheme { input, .. }
            | InvalidUrlError::MissingAuthority { input }
            | InvalidUrlError::UserInfo { input }
            | InvalidUrlError::Ipv6Host { input } => input,
        }
    }
}
