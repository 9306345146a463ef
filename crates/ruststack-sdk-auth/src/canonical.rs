//! Canonical request construction for AWS Signature Version 4.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! The encoding helpers are public so request builders encode paths and query
//! strings exactly the way they will be signed.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sha2::{Digest, Sha256};

/// Everything except the RFC 3986 unreserved characters is encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Headers that proxies or the transport may rewrite; they are never signed.
const UNSIGNED_HEADERS: &[&str] = &[
    "authorization",
    "connection",
    "expect",
    "proxy-authorization",
    "transfer-encoding",
    "user-agent",
    "x-amzn-trace-id",
];

/// A fully assembled canonical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    headers: String,
    signed_headers: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Assemble a canonical request from raw request components.
    ///
    /// `headers` may contain headers that are not in `signed_headers`; they
    /// are ignored. `query` is the raw (already encoded) query string.
    #[must_use]
    pub fn new(
        method: &str,
        path: &str,
        query: &str,
        headers: &[(&str, &str)],
        signed_headers: &[&str],
        payload_hash: &str,
    ) -> Self {
        Self {
            method: method.to_owned(),
            uri: build_canonical_uri(path),
            query: build_canonical_query_string(query),
            headers: build_canonical_headers(headers, signed_headers),
            signed_headers: build_signed_headers_string(signed_headers),
            payload_hash: payload_hash.to_owned(),
        }
    }

    /// `;`-joined sorted list of signed header names.
    #[must_use]
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Hex SHA-256 of the canonical request, used in the string to sign.
    #[must_use]
    pub fn hash(&self) -> String {
        hex::encode(Sha256::digest(self.to_string().as_bytes()))
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}\n\n{}\n{}",
            self.method, self.uri, self.query, self.headers, self.signed_headers, self.payload_hash
        )
    }
}

/// Names of the headers in `headers` that take part in the signature, lowercased and sorted.
#[must_use]
pub fn signable_header_names(headers: &[(&str, &str)]) -> Vec<String> {
    let mut names: Vec<String> = headers
        .iter()
        .map(|(name, _)| name.to_ascii_lowercase())
        .filter(|name| !UNSIGNED_HEADERS.contains(&name.as_str()))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Build the canonical URI by URI-encoding each path segment individually.
///
/// Segments are decoded first so an already encoded path is not encoded twice.
/// Dot segments come out as `%2E`, matching [`uri_encode_path`] and the wire.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::canonical::build_canonical_uri;
///
/// assert_eq!(build_canonical_uri("/test.txt"), "/test.txt");
/// assert_eq!(build_canonical_uri("/a%20b"), "/a%20b");
/// assert_eq!(build_canonical_uri(""), "/");
/// ```
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| {
            encode_path_segment(&percent_decode_str(segment).decode_utf8_lossy())
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Sort the raw query parameters by name, then by value.
///
/// Values are kept exactly as they appear on the wire.
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();

    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block for the names in `signed_headers`.
///
/// Values are trimmed and inner whitespace runs collapse to one space.
/// Repeated headers are joined with commas. No trailing newline.
#[must_use]
pub fn build_canonical_headers(headers: &[(&str, &str)], signed_headers: &[&str]) -> String {
    let mut header_map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let trimmed_value = collapse_whitespace(value.trim());
        header_map
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&trimmed_value);
            })
            .or_insert(trimmed_value);
    }

    let mut sorted_signed: Vec<&str> = signed_headers.to_vec();
    sorted_signed.sort_unstable();

    sorted_signed
        .iter()
        .filter_map(|name| header_map.get(*name).map(|value| format!("{name}:{value}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sorted, `;`-separated list of header names.
#[must_use]
pub fn build_signed_headers_string(signed_headers: &[&str]) -> String {
    let mut sorted: Vec<&str> = signed_headers.to_vec();
    sorted.sort_unstable();
    sorted.join(";")
}

/// Percent-encode a single path segment or query component.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::canonical::uri_encode;
///
/// assert_eq!(uri_encode("a b/c"), "a%20b%2Fc");
/// assert_eq!(uri_encode("photo~1.jpg"), "photo~1.jpg");
/// ```
#[must_use]
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

/// Percent-encode a path, preserving `/` separators.
///
/// Segments made only of dots (`.`, `..`) are fully encoded; HTTP stacks
/// resolve literal dot segments, which would change the target key.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::canonical::uri_encode_path;
///
/// assert_eq!(uri_encode_path("photos/2024 trip/a+b.jpg"), "photos/2024%20trip/a%2Bb.jpg");
/// assert_eq!(uri_encode_path("photos/../secret.txt"), "photos/%2E%2E/secret.txt");
/// ```
#[must_use]
pub fn uri_encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_path_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.bytes().all(|b| b == b'.') {
        return "%2E".repeat(segment.len());
    }
    uri_encode(segment)
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_should_encode_special_characters_in_path() {
        assert_eq!(build_canonical_uri("/hello world"), "/hello%20world");
        assert_eq!(build_canonical_uri("/a%2Bb"), "/a%2Bb");
    }

    #[test]
    fn test_should_preserve_empty_segments() {
        assert_eq!(build_canonical_uri("/bucket//key"), "/bucket//key");
    }

    #[test]
    fn test_should_sort_query_parameters() {
        assert_eq!(build_canonical_query_string("b=2&a=1&c=3"), "a=1&b=2&c=3");
        assert_eq!(build_canonical_query_string("acl"), "acl=");
        assert_eq!(build_canonical_query_string(""), "");
    }

    #[test]
    fn test_should_collapse_whitespace_in_header_values() {
        let headers = [("Host", "  example.com  "), ("X-Custom", "a   b   c")];
        let result = build_canonical_headers(&headers, &["host", "x-custom"]);
        assert_eq!(result, "host:example.com\nx-custom:a b c");
    }

    #[test]
    fn test_should_join_repeated_headers_with_comma() {
        let headers = [("x-amz-meta-a", "1"), ("X-Amz-Meta-A", "2")];
        assert_eq!(
            build_canonical_headers(&headers, &["x-amz-meta-a"]),
            "x-amz-meta-a:1,2"
        );
    }

    #[test]
    fn test_should_skip_unsigned_headers() {
        let headers = [
            ("User-Agent", "ruststack"),
            ("Host", "example.com"),
            ("x-amz-date", "20130524T000000Z"),
            ("Authorization", "old"),
        ];
        assert_eq!(signable_header_names(&headers), vec!["host", "x-amz-date"]);
    }

    #[test]
    fn test_should_encode_path_keeping_slashes() {
        assert_eq!(uri_encode_path("a/b c/d"), "a/b%20c/d");
        assert_eq!(uri_encode_path("\u{e9}t\u{e9}.txt"), "%C3%A9t%C3%A9.txt");
    }

    #[test]
    fn test_should_encode_dot_segments() {
        assert_eq!(uri_encode_path("a/./b"), "a/%2E/b");
        assert_eq!(uri_encode_path("../x"), "%2E%2E/x");
        assert_eq!(uri_encode_path("a/.../b"), "a/%2E%2E%2E/b");
        assert_eq!(uri_encode_path("a/.hidden/b.txt"), "a/.hidden/b.txt");
    }

    #[test]
    fn test_should_sign_dot_segments_as_sent() {
        let wire = format!("/bucket/{}", uri_encode_path("photos/../secret.txt"));
        assert_eq!(wire, "/bucket/photos/%2E%2E/secret.txt");
        assert_eq!(build_canonical_uri(&wire), wire);
        assert_eq!(build_canonical_uri("/bucket/./k"), "/bucket/%2E/k");
    }

    #[test]
    fn test_should_build_canonical_request_matching_aws_example() {
        let headers = [
            ("host", "examplebucket.s3.amazonaws.com"),
            ("range", "bytes=0-9"),
            ("x-amz-content-sha256", EMPTY_SHA256),
            ("x-amz-date", "20130524T000000Z"),
        ];
        let canonical = CanonicalRequest::new(
            "GET",
            "/test.txt",
            "",
            &headers,
            &["host", "range", "x-amz-content-sha256", "x-amz-date"],
            EMPTY_SHA256,
        );

        let expected = format!(
            "GET\n/test.txt\n\nhost:examplebucket.s3.amazonaws.com\nrange:bytes=0-9\n\
             x-amz-content-sha256:{EMPTY_SHA256}\nx-amz-date:20130524T000000Z\n\n\
             host;range;x-amz-content-sha256;x-amz-date\n{EMPTY_SHA256}"
        );
        assert_eq!(canonical.to_string(), expected);
        assert_eq!(
            canonical.hash(),
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
        );
        assert_eq!(
            canonical.signed_headers(),
            "host;range;x-amz-content-sha256;x-amz-date"
        );
    }
}
