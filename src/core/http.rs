//! HTTP utilities for NBA stats API communication

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Headers `stats.nba.com` expects before it will answer.
///
/// Requests without a browser-like user agent, origin and the `x-nba-stats-*`
/// pair tend to hang rather than fail.
pub fn stats_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_headers_contains_required_keys() {
        let headers = stats_headers();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(REFERER).unwrap(), "https://www.nba.com/");
        assert_eq!(headers.get("x-nba-stats-origin").unwrap(), "stats");
        assert_eq!(headers.get("x-nba-stats-token").unwrap(), "true");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_stats_headers_has_no_cookie() {
        let headers = stats_headers();
        assert!(!headers.contains_key(reqwest::header::COOKIE));
        assert_eq!(headers.len(), 6);
    }
}
