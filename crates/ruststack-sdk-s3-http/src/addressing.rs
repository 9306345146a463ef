//! Virtual-hosted vs path-style bucket addressing.
//!
//! Virtual-hosted: `https://bucket.s3.eu-west-1.amazonaws.com/key`
//! Path-style: `https://s3.eu-west-1.amazonaws.com/bucket/key`
//!
//! Virtual-hosted addressing is used unless the configuration forces path
//! style, the bucket name is not a single DNS label, or the endpoint host is
//! an IP address or `localhost`.

use std::net::IpAddr;

/// How a request locates its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Bucket is a subdomain of the endpoint host.
    VirtualHosted,
    /// Bucket is the first path segment.
    PathStyle,
}

/// Choose the addressing mode for `bucket` on an endpoint `authority`.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_s3_http::addressing::{Addressing, select_addressing};
///
/// assert_eq!(
///     select_addressing("photos", "s3.eu-west-1.amazonaws.com", false),
///     Addressing::VirtualHosted
/// );
/// assert_eq!(
///     select_addressing("photos", "localhost:4566", false),
///     Addressing::PathStyle
/// );
/// assert_eq!(
///     select_addressing("my.dotted.bucket", "s3.amazonaws.com", false),
///     Addressing::PathStyle
/// );
/// ```
#[must_use]
pub fn select_addressing(bucket: &str, authority: &str, force_path_style: bool) -> Addressing {
    if force_path_style || !is_virtual_hostable_bucket(bucket) || !is_dns_endpoint(authority) {
        Addressing::PathStyle
    } else {
        Addressing::VirtualHosted
    }
}

/// Whether `bucket` can be used as a single host label.
///
/// 3 to 63 characters of lowercase letters, digits and hyphens, starting
/// and ending with a letter or digit.
#[must_use]
pub fn is_virtual_hostable_bucket(bucket: &str) -> bool {
    let bytes = bucket.as_bytes();
    if !(3..=63).contains(&bytes.len()) {
        return false;
    }
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    edge_ok(bytes[0])
        && edge_ok(bytes[bytes.len() - 1])
        && bytes
            .iter()
            .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn is_dns_endpoint(authority: &str) -> bool {
    let host = host_of(authority);
    if host.eq_ignore_ascii_case("localhost") {
        return false;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_err()
}

/// Strip the port from an authority, keeping IPv6 brackets.
fn host_of(authority: &str) -> &str {
    if authority.starts_with('[') {
        return authority
            .find(']')
            .map_or(authority, |end| &authority[..=end]);
    }
    authority.split(':').next().unwrap_or(authority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_virtual_host_for_dns_bucket() {
        assert_eq!(
            select_addressing("my-bucket-1", "s3.us-west-2.amazonaws.com", false),
            Addressing::VirtualHosted
        );
    }

    #[test]
    fn test_should_honor_force_path_style() {
        assert_eq!(
            select_addressing("my-bucket", "s3.us-west-2.amazonaws.com", true),
            Addressing::PathStyle
        );
    }

    #[test]
    fn test_should_use_path_style_for_ip_endpoints() {
        assert_eq!(
            select_addressing("bucket", "127.0.0.1:9000", false),
            Addressing::PathStyle
        );
        assert_eq!(select_addressing("bucket", "[::1]:9000", false), Addressing::PathStyle);
        assert_eq!(select_addressing("bucket", "LOCALHOST", false), Addressing::PathStyle);
    }

    #[test]
    fn test_should_reject_non_dns_bucket_names() {
        assert!(!is_virtual_hostable_bucket("ab"));
        assert!(!is_virtual_hostable_bucket("Upper"));
        assert!(!is_virtual_hostable_bucket("-leading"));
        assert!(!is_virtual_hostable_bucket("trailing-"));
        assert!(!is_virtual_hostable_bucket("under_score"));
        assert!(!is_virtual_hostable_bucket("with.dots"));
        assert!(!is_virtual_hostable_bucket(&"a".repeat(64)));
        assert!(is_virtual_hostable_bucket("abc"));
        assert!(is_virtual_hostable_bucket(&"a".repeat(63)));
    }

    #[test]
    fn test_should_strip_port_from_authority() {
        assert_eq!(host_of("s3.amazonaws.com:443"), "s3.amazonaws.com");
        assert_eq!(host_of("[::1]:9000"), "[::1]");
        assert_eq!(host_of("minio"), "minio");
    }
}
