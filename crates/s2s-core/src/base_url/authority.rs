//! `scheme://host[:port]` extraction for a parsed base URL.

use super::InvalidUrlError;
use url::{Host, Url};

/// Builds the `scheme://host[:port]` prefix of the canonical URL.
///
/// `parsed` validates the input; the text itself is taken from `trimmed` so
/// scheme and host keep their case and an explicit port survives even when
/// it equals the scheme default (the `url` crate drops `:80` and `:443`).
/// A host the parser rewrote beyond case (IDN, percent-encoding, IPv4
/// shorthand) falls back to the parser's form.
pub fn origin(parsed: &Url, trimmed: &str) -> Result<String, InvalidUrlError> {
    let missing = || InvalidUrlError::MissingAuthority {
        input: trimmed.to_string(),
    };

    let scheme_len = parsed.scheme().len();
    let raw_scheme = trimmed.get(..scheme_len).ok_or_else(missing)?;
    // Special schemes parse `http:host` too; require the `//`.
    let rest = trimmed
        .get(scheme_len..)
        .and_then(|s| s.strip_prefix("://"))
        .ok_or_else(missing)?;
    let scheme = if raw_scheme.eq_ignore_ascii_case(parsed.scheme()) {
        raw_scheme
    } else {
        parsed.scheme()
    };

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(InvalidUrlError::UserInfo {
            input: trimmed.to_string(),
        });
    }

    let host = match parsed.host() {
        None => return Err(missing()),
        Some(Host::Ipv6(_)) => {
            return Err(InvalidUrlError::Ipv6Host {
                input: trimmed.to_string(),
            })
        }
        Some(Host::Domain(_)) | Some(Host::Ipv4(_)) => parsed.host_str().ok_or_else(missing)?,
    };
    if host.is_empty() {
        return Err(missing());
    }

    let (raw_host, raw_port) = split_authority(rest);
    let host = if raw_host.eq_ignore_ascii_case(host) {
        raw_host
    } else {
        host
    };
    let port = parsed.port().or_else(|| raw_port.and_then(parse_port));

    Ok(match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    })
}

/// Splits the text after `://` into host and port text. The authority ends
/// at the first path, query or fragment delimiter; special schemes treat `\`
/// like `/`. Userinfo and IPv6 literals are rejected before this runs.
fn split_authority(rest: &str) -> (&str, Option<&str>) {
    let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    }
}

fn parse_port(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
