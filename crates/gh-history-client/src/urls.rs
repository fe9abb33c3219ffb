//! Raw-file and hosted-viewer URL construction
//!
//! Pure functions that resolve a revision to the URLs the display strategies
//! consume: the raw file location for one (owner, repo, sha, path) tuple and
//! the hosted viewer page wrapping it.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything a JS `encodeURIComponent` escapes: all non-alphanumerics
/// except `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URL query component
pub fn encode_uri_component(s: &str) -> String {
    percent_encode(s.as_bytes(), URI_COMPONENT).to_string()
}

/// Build the raw file URL for one revision of the tracked file
///
/// `{raw_host}/{owner}/{repo}/{sha}/{path}`. The path is kept verbatim
/// since it is a repository path, not a query component.
pub fn raw_file_url(raw_host: &str, owner: &str, repo: &str, sha: &str, path: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        raw_host.trim_end_matches('/'),
        owner,
        repo,
        sha,
        path
    )
}

/// Build the hosted viewer URL for a raw file URL
///
/// The raw URL goes into the `file` query parameter, percent-encoded so no
/// separator of the embedded URL survives into the outer one.
pub fn viewer_url(viewer_endpoint: &str, raw_url: &str) -> String {
    format!("{}?file={}", viewer_endpoint, encode_uri_component(raw_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component_passthrough() {
        assert_eq!(encode_uri_component("abc-123_x.y"), "abc-123_x.y");
        assert_eq!(encode_uri_component("~*!'()"), "~*!'()");
    }

    #[test]
    fn test_encode_uri_component_escapes_separators() {
        assert_eq!(encode_uri_component(":"), "%3A");
        assert_eq!(encode_uri_component("/"), "%2F");
        assert_eq!(encode_uri_component("?"), "%3F");
        assert_eq!(encode_uri_component("&"), "%26");
        assert_eq!(encode_uri_component("="), "%3D");
        assert_eq!(encode_uri_component("a b"), "a%20b");
    }

    #[test]
    fn test_raw_file_url() {
        let url = raw_file_url(
            "https://raw.githubusercontent.com",
            "renanbazinin",
            "CV-RENAN",
            "abc1234def",
            "CV-RenanBazinin.pdf",
        );
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/renanbazinin/CV-RENAN/abc1234def/CV-RenanBazinin.pdf"
        );
    }

    #[test]
    fn test_raw_file_url_trailing_slash_host() {
        let url = raw_file_url("https://raw.example.com/", "o", "r", "s", "p.pdf");
        assert_eq!(url, "https://raw.example.com/o/r/s/p.pdf");
    }

    #[test]
    fn test_viewer_url_encodes_raw_url() {
        let raw = raw_file_url(
            "https://raw.githubusercontent.com",
            "renanbazinin",
            "CV-RENAN",
            "abc1234def",
            "CV-RenanBazinin.pdf",
        );
        let url = viewer_url("https://mozilla.github.io/pdf.js/web/viewer.html", &raw);

        assert!(url.starts_with("https://mozilla.github.io/pdf.js/web/viewer.html?file="));
        let value = url.split_once("?file=").unwrap().1;
        // No raw separators from the embedded URL survive in the query value
        assert!(!value.contains(':'));
        assert!(!value.contains('/'));
        assert!(value.contains("%3A%2F%2F"));
        assert!(value.contains("abc1234def"));
    }
}
