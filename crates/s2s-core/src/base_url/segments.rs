//! The `nifi-api` suffix rule applied to the last path segment.

/// Final segment every canonical base URL ends with.
pub const API_SEGMENT: &str = "nifi-api";

/// UI context path; a trailing one is rewritten to [`API_SEGMENT`].
pub const UI_SEGMENT: &str = "nifi";

/// Drops empty segments and applies the suffix rule to the last one.
///
/// Matching is exact and case-sensitive: only `nifi` is rewritten and only
/// `nifi-api` is left as is. Any other last segment gets `nifi-api` appended.
pub fn with_api_suffix<'a, I>(segments: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&'a str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    match out.last().copied() {
        Some(API_SEGMENT) => {}
        Some(UI_SEGMENT) => {
            out.pop();
            out.push(API_SEGMENT);
        }
        _ => out.push(API_SEGMENT),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_gets_suffix() {
        assert_eq!(with_api_suffix(Vec::<&str>::new()), vec!["nifi-api"]);
        assert_eq!(with_api_suffix(vec!["", ""]), vec!["nifi-api"]);
    }

    #[test]
    fn ui_segment_is_replaced() {
        assert_eq!(with_api_suffix(vec!["nifi"]), vec!["nifi-api"]);
        assert_eq!(
            with_api_suffix(vec!["foo", "bar", "nifi", ""]),
            vec!["foo", "bar", "nifi-api"]
        );
    }

    #[test]
    fn api_segment_is_kept() {
        assert_eq!(with_api_suffix(vec!["nifi-api", ""]), vec!["nifi-api"]);
        assert_eq!(
            with_api_suffix(vec!["some", "path", "nifi-api"]),
            vec!["some", "path", "nifi-api"]
        );
    }

    #[test]
    fn other_segments_get_suffix_appended() {
        assert_eq!(
            with_api_suffix(vec!["some", "", "path"]),
            vec!["some", "path", "nifi-api"]
        );
    }

    #[test]
    fn only_last_segment_is_special() {
        assert_eq!(
            with_api_suffix(vec!["nifi", "nifi-api", "x"]),
            vec!["nifi", "nifi-api", "x", "nifi-api"]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(with_api_suffix(vec!["NiFi"]), vec!["NiFi", "nifi-api"]);
        assert_eq!(
            with_api_suffix(vec!["NIFI-API"]),
            vec!["NIFI-API", "nifi-api"]
        );
    }
}
