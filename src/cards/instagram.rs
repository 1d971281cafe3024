//! Instagram profile URL normalization and deep links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// The only host accepted for profile URLs (after dropping `www.`)
pub const DOMAIN: &str = "instagram.com";

/// Characters left unescaped by URI component encoding:
/// alphanumerics and `- _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Result of normalizing a profile URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub username: String,
    /// Canonical `https://instagram.com/<username>` form
    pub url: String,
}

/// App and web targets for a username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinks {
    pub app_url: String,
    pub web_url: String,
}

/// Reduce a full profile URL to its username
///
/// Only the first non-empty path segment is used, so `/alice/tagged` yields
/// `alice` and some non-profile pages on the domain are accepted too. Query
/// strings and fragments are ignored.
pub fn normalize(raw_url: &str) -> Option<NormalizedUrl> {
    let url = Url::parse(raw_url).ok()?;

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host != DOMAIN {
        return None;
    }

    let first = url.path().split('/').find(|segment| !segment.is_empty())?;
    let username = first.trim_start_matches('@');
    if username.is_empty() {
        return None;
    }

    Some(NormalizedUrl {
        username: username.to_string(),
        url: format!("https://{}/{}", DOMAIN, username),
    })
}

/// Build the custom-scheme app link and the web fallback for a username
///
/// Any input is accepted; validity of the username is the caller's concern.
pub fn build_links(username: &str) -> DeepLinks {
    let encoded = utf8_percent_encode(username, COMPONENT).to_string();
    DeepLinks {
        app_url: format!("instagram://user?username={}", encoded),
        web_url: format!("https://{}/{}", DOMAIN, encoded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(raw: &str) -> Option<String> {
        normalize(raw).map(|n| n.username)
    }

    #[test]
    fn test_plain_profile_url() {
        let n = normalize("https://instagram.com/alice").unwrap();
        assert_eq!(n.username, "alice");
        assert_eq!(n.url, "https://instagram.com/alice");
    }

    #[test]
    fn test_www_and_trailing_slash() {
        assert_eq!(
            username("https://www.instagram.com/alice/"),
            Some("alice".to_string())
        );
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert_eq!(
            username("https://WWW.Instagram.COM/alice"),
            Some("alice".to_string())
        );
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(username("https://instagram.com/"), None);
        assert_eq!(username("https://instagram.com"), None);
        assert_eq!(username("https://instagram.com//"), None);
    }

    #[test]
    fn test_other_hosts_rejected() {
        assert_eq!(username("https://notinstagram.com/alice"), None);
        assert_eq!(username("https://instagram.com.evil.net/alice"), None);
        assert_eq!(username("https://m.instagram.com/alice"), None);
        assert_eq!(username("https://example.com/alice"), None);
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(username("not a url"), None);
        assert_eq!(username(""), None);
        assert_eq!(username("instagram.com/alice"), None);
    }

    #[test]
    fn test_query_fragment_and_extra_segments_ignored() {
        assert_eq!(
            username("https://instagram.com/alice?igsh=abc#top"),
            Some("alice".to_string())
        );
        assert_eq!(
            username("https://instagram.com/alice/tagged/"),
            Some("alice".to_string())
        );
    }

    #[test]
    fn test_non_profile_page_is_accepted() {
        // Known imprecision: the first segment is taken verbatim
        assert_eq!(
            username("https://instagram.com/explore/tags/rust"),
            Some("explore".to_string())
        );
    }

    #[test]
    fn test_leading_at_is_dropped() {
        assert_eq!(
            username("https://instagram.com/@alice"),
            Some("alice".to_string())
        );
        assert_eq!(username("https://instagram.com/@"), None);
    }

    #[test]
    fn test_repeated_at_is_dropped() {
        assert_eq!(
            username("https://instagram.com/@@alice"),
            Some("alice".to_string())
        );
        assert_eq!(username("https://instagram.com/@@"), None);
    }

    #[test]
    fn test_build_links() {
        let links = build_links("alice");
        assert_eq!(links.app_url, "instagram://user?username=alice");
        assert_eq!(links.web_url, "https://instagram.com/alice");
    }

    #[test]
    fn test_build_links_encodes_reserved() {
        let links = build_links("a b/c?d&e");
        assert_eq!(links.app_url, "instagram://user?username=a%20b%2Fc%3Fd%26e");
        assert_eq!(links.web_url, "https://instagram.com/a%20b%2Fc%3Fd%26e");
    }

    #[test]
    fn test_build_links_keeps_unreserved() {
        let links = build_links("first.last_(x)~!*'-1");
        assert_eq!(links.web_url, "https://instagram.com/first.last_(x)~!*'-1");
    }

    #[test]
    fn test_build_links_utf8() {
        let links = build_links("é");
        assert_eq!(links.app_url, "instagram://user?username=%C3%A9");
    }
}
