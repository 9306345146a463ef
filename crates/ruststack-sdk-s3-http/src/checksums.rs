//! Payload checksums sent with S3 requests.
//!
//! S3 expects every checksum header base64-encoded:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Content-MD5` | base64 of the 16-byte MD5 digest |
//! | `x-amz-checksum-crc32` / `-crc32c` | base64 of the big-endian `u32` |
//! | `x-amz-checksum-sha1` / `-sha256` | base64 of the digest |

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use digest::Digest;
use ruststack_sdk_s3_model::types::ChecksumAlgorithm;

/// Compute the `Content-MD5` value for `data`.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_s3_http::checksums::compute_content_md5;
///
/// assert_eq!(compute_content_md5(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
/// ```
#[must_use]
pub fn compute_content_md5(data: &[u8]) -> String {
    BASE64_STANDARD.encode(md5::Md5::digest(data))
}

/// Compute a base64-encoded checksum for the given algorithm.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_s3_http::checksums::compute_checksum;
/// use ruststack_sdk_s3_model::types::ChecksumAlgorithm;
///
/// let b64 = compute_checksum(ChecksumAlgorithm::Crc32, b"hello");
/// assert_eq!(b64, "NhCmhg==");
/// ```
#[must_use]
pub fn compute_checksum(algorithm: ChecksumAlgorithm, data: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Crc32 => {
            let mut hasher = crc32fast::Hasher::new();
            hasher.update(data);
            BASE64_STANDARD.encode(hasher.finalize().to_be_bytes())
        }
        ChecksumAlgorithm::Crc32c => BASE64_STANDARD.encode(crc32c::crc32c(data).to_be_bytes()),
        ChecksumAlgorithm::Sha1 => BASE64_STANDARD.encode(sha1::Sha1::digest(data)),
        ChecksumAlgorithm::Sha256 => BASE64_STANDARD.encode(sha2::Sha256::digest(data)),
    }
}

/// Whether `value` looks like a `Content-MD5` header (base64 of 16 bytes).
#[must_use]
pub fn is_valid_content_md5(value: &str) -> bool {
    BASE64_STANDARD
        .decode(value)
        .is_ok_and(|bytes| bytes.len() == 16)
}
