//! Parsed deep-link value object and its flattened parameter map.

use indexmap::IndexMap;
use url::Url;

/// Flat, insertion-ordered parameter map handed to deep-link handlers.
pub type LinkParams = IndexMap<String, String>;

/// A deep link decomposed into its attribution-relevant parts.
///
/// Derived purely from a URI and immutable once constructed. Construction
/// never fails: a degenerate URI (no path, no query) simply produces a
/// near-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    pub scheme: String,
    /// Host component, empty when the URI has none.
    pub host: String,
    /// Full path as given by the URI, including the leading `/` if present.
    pub path: String,
    /// Path segments in order of appearance. The leading empty segment from
    /// the `/` prefix is dropped; interior and trailing empty segments are
    /// kept verbatim.
    pub segments: Vec<String>,
    /// Query parameters in order of first appearance. A repeated key keeps
    /// the last value (last-write-wins).
    pub query: IndexMap<String, String>,
}

impl ParsedLink {
    /// Decomposes an already-parsed URI.
    pub fn from_url(url: &Url) -> Self {
        let path = url.path().to_string();

        let trimmed = path.strip_prefix('/').unwrap_or(&path);
        let segments: Vec<String> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(str::to_string).collect()
        };

        let mut query = IndexMap::new();
        for (key, value) in url.query_pairs() {
            query.insert(key.into_owned(), value.into_owned());
        }

        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().unwrap_or_default().to_string(),
            path,
            segments,
            query,
        }
    }

    /// Flattens the link into a single ordered string map.
    ///
    /// Keys, in insertion order:
    ///
    /// - `path` and `segment_0..segment_N-1` when the path has at least one
    ///   segment
    /// - `host` and `scheme` when non-empty
    /// - every query parameter, verbatim
    ///
    /// Query parameters are merged last, so a query parameter named `path`,
    /// `segment_0`, `host` or `scheme` replaces the derived value of the same
    /// name. Callers relying on the derived keys must account for this.
    pub fn params(&self) -> LinkParams {
        let mut params = LinkParams::new();

        if !self.segments.is_empty() {
            params.insert("path".to_string(), self.path.clone());
            for (index, segment) in self.segments.iter().enumerate() {
                params.insert(format!("segment_{index}"), segment.clone());
            }
        }

        if !self.host.is_empty() {
            params.insert("host".to_string(), self.host.clone());
        }
        if !self.scheme.is_empty() {
            params.insert("scheme".to_string(), self.scheme.clone());
        }

        for (key, value) in &self.query {
            params.insert(key.clone(), value.clone());
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParsedLink {
        ParsedLink::from_url(&Url::parse(input).unwrap())
    }

    #[test]
    fn test_query_params_pass_through() {
        let params = parse("https://r.example.com/welcome?foo=bar").params();
        assert_eq!(params.get("foo").unwrap(), "bar");
    }

    #[test]
    fn test_path_and_segments_in_order() {
        let params = parse("https://r.example.com/a/b/c").params();
        assert_eq!(params.get("path").unwrap(), "/a/b/c");
        assert_eq!(params.get("segment_0").unwrap(), "a");
        assert_eq!(params.get("segment_1").unwrap(), "b");
        assert_eq!(params.get("segment_2").unwrap(), "c");
        assert!(!params.contains_key("segment_3"));
    }

    #[test]
    fn test_no_path_yields_no_path_keys() {
        let params = parse("referme://referral?token=ABC").params();
        assert!(!params.contains_key("path"));
        assert!(!params.contains_key("segment_0"));
    }

    #[test]
    fn test_root_path_yields_no_segments() {
        let link = parse("https://r.example.com/");
        assert!(link.segments.is_empty());
        assert!(!link.params().contains_key("path"));
    }

    #[test]
    fn test_trailing_slash_keeps_empty_segment() {
        let link = parse("https://r.example.com/a/b/");
        assert_eq!(link.segments, vec!["a", "b", ""]);
        assert_eq!(link.params().get("segment_2").unwrap(), "");
    }

    #[test]
    fn test_host_and_scheme_keys() {
        let params = parse("referme://referral").params();
        assert_eq!(params.get("host").unwrap(), "referral");
        assert_eq!(params.get("scheme").unwrap(), "referme");
    }

    #[test]
    fn test_query_param_overwrites_path_key() {
        // A query parameter literally named `path` silently replaces the
        // derived full path. Observed upstream behavior, kept as-is.
        let params = parse("https://r.example.com/X?path=Y").params();
        assert_eq!(params.get("path").unwrap(), "Y");
    }

    #[test]
    fn test_query_param_overwrites_segment_key() {
        let params = parse("https://r.example.com/real?segment_0=fake").params();
        assert_eq!(params.get("segment_0").unwrap(), "fake");
    }

    #[test]
    fn test_repeated_query_key_keeps_last_value() {
        let params = parse("https://r.example.com/?ref=first&ref=second").params();
        assert_eq!(params.get("ref").unwrap(), "second");
    }

    #[test]
    fn test_custom_scheme_scenario() {
        let params =
            parse("referme://referral?token=ABC123&source=email&campaign=winter2024").params();

        assert_eq!(params.get("scheme").unwrap(), "referme");
        assert_eq!(params.get("host").unwrap(), "referral");
        assert_eq!(params.get("token").unwrap(), "ABC123");
        assert_eq!(params.get("source").unwrap(), "email");
        assert_eq!(params.get("campaign").unwrap(), "winter2024");
        assert!(!params.contains_key("path"));
    }

    #[test]
    fn test_universal_link_shape() {
        let params = parse("https://go.referme.app/ab12xy?ref=USER9").params();
        assert_eq!(params.get("scheme").unwrap(), "https");
        assert_eq!(params.get("host").unwrap(), "go.referme.app");
        assert_eq!(params.get("segment_0").unwrap(), "ab12xy");
        assert_eq!(params.get("ref").unwrap(), "USER9");
    }

    #[test]
    fn test_degenerate_uri_is_near_empty() {
        let params = parse("referme://referral").params();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_query_values_are_verbatim_strings() {
        let params = parse("https://r.example.com/?count=3&flag=true").params();
        assert_eq!(params.get("count").unwrap(), "3");
        assert_eq!(params.get("flag").unwrap(), "true");
    }

    #[test]
    fn test_params_preserves_insertion_order() {
        let params = parse("https://r.example.com/a?z=1&y=2").params();
        let keys: Vec<&String> = params.keys().collect();
        assert_eq!(keys, ["path", "segment_0", "host", "scheme", "z", "y"]);
    }
}
