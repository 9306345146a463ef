//! HTTP response to S3 Output struct deserialization.
//!
//! Response categories:
//! - **Header-only**: most write operations report metadata in headers.
//! - **XML body**: list operations and configuration getters.
//! - **Raw body**: `GetObject` and `GetBucketPolicy`.
//! - **Mixed**: `CopyObject` and `CompleteMultipartUpload` return an XML body
//!   plus headers, and may carry an `<Error>` document with a `200 OK`.
//!
//! Responses reaching [`FromS3Response`] already have a 2xx status.

use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use ruststack_sdk_core::SdkError;
use ruststack_sdk_s3_model::StreamingBlob;
use ruststack_sdk_s3_model::types::{
    AccessControlPolicy, CORSConfiguration, ChecksumAlgorithm, Checksums, CopyObjectResult,
    Tagging,
};
use ruststack_sdk_s3_xml::{S3Deserialize, from_xml, is_error_document};
use tracing::warn;

use crate::error::error_from_response;

/// Trait for converting an HTTP response into an S3 output struct.
pub trait FromS3Response: Sized {
    /// Parse a successful response.
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError>;
}

// ---------------------------------------------------------------------------
// Helper functions for extracting typed values from response headers
// ---------------------------------------------------------------------------

/// Extract a header value as a string.
#[must_use]
pub fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Extract a header value and parse it into a type implementing `FromStr`.
#[must_use]
pub fn header_parse<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}

/// Extract a header value and parse it as a boolean.
#[must_use]
pub fn header_bool(headers: &HeaderMap, name: &str) -> Option<bool> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.eq_ignore_ascii_case("true"))
}

/// Extract a header value and parse it as an HTTP date timestamp.
#[must_use]
pub fn header_timestamp(headers: &HeaderMap, name: &str) -> Option<DateTime<Utc>> {
    let value = headers.get(name)?.to_str().ok()?;
    parse_http_date(value)
}

/// Extract an enumeration header; unknown values are logged and dropped.
fn header_enum<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let value = headers.get(name)?.to_str().ok()?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(header = name, value, "ignoring unrecognized enum value in response");
            None
        }
    }
}

/// Parse an HTTP date string into a `DateTime<Utc>`.
///
/// Tries multiple date formats commonly used in HTTP and AWS:
/// - RFC 1123 (e.g., `Mon, 15 Jan 2024 10:30:00 GMT`)
/// - RFC 2822
/// - ISO 8601 / RFC 3339 (e.g., `2024-01-15T10:30:00Z`)
#[must_use]
pub fn parse_http_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    None
}

/// Collect all `x-amz-meta-*` headers into a metadata `HashMap`.
#[must_use]
pub fn collect_metadata(headers: &HeaderMap) -> HashMap<String, String> {
    let prefix = "x-amz-meta-";
    headers
        .iter()
        .filter_map(|(name, value)| {
            let meta_key = name.as_str().strip_prefix(prefix)?;
            let meta_value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            Some((meta_key.to_owned(), meta_value))
        })
        .collect()
}

fn collect_checksums(headers: &HeaderMap) -> Checksums {
    let mut checksums = Checksums::default();
    for algorithm in [
        ChecksumAlgorithm::Crc32,
        ChecksumAlgorithm::Crc32c,
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha256,
    ] {
        if let Some(value) = header_str(headers, algorithm.header_name()) {
            checksums.set(algorithm, value);
        }
    }
    checksums
}

fn parse_xml_body<T: S3Deserialize + Default>(body: &Bytes) -> Result<T, SdkError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(from_xml(body)?)
}

/// Reject a `200 OK` whose body is an `<Error>` document.
fn reject_embedded_error(response: &http::Response<Bytes>) -> Result<(), SdkError> {
    if is_error_document(response.body()) {
        return Err(SdkError::Service(error_from_response(response)));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

#[allow(clippy::wildcard_imports)]
use ruststack_sdk_s3_model::output::*;

// --- Bucket operations ---

impl FromS3Response for CreateBucketOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            location: header_str(response.headers(), "location"),
        })
    }
}

impl FromS3Response for DeleteBucketOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for HeadBucketOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let headers = response.headers();
        Ok(Self {
            access_point_alias: header_bool(headers, "x-amz-access-point-alias"),
            bucket_region: header_str(headers, "x-amz-bucket-region"),
        })
    }
}

impl FromS3Response for ListBucketsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        parse_xml_body(response.body())
    }
}

impl FromS3Response for GetBucketLocationOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        parse_xml_body(response.body())
    }
}

impl FromS3Response for GetBucketAclOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let policy: AccessControlPolicy = parse_xml_body(response.body())?;
        Ok(Self {
            grants: policy.grants,
            owner: policy.owner,
        })
    }
}

impl FromS3Response for PutBucketAclOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for GetBucketVersioningOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        parse_xml_body(response.body())
    }
}

impl FromS3Response for PutBucketVersioningOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for GetBucketTaggingOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let tagging: Tagging = parse_xml_body(response.body())?;
        Ok(Self {
            tag_set: tagging.tag_set,
        })
    }
}

impl FromS3Response for PutBucketTaggingOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for DeleteBucketTaggingOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for GetBucketPolicyOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let policy = String::from_utf8(response.into_body().to_vec())
            .map_err(|e| SdkError::Decode(format!("bucket policy is not UTF-8: {e}")))?;
        Ok(Self { policy })
    }
}

impl FromS3Response for PutBucketPolicyOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for DeleteBucketPolicyOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for GetBucketCorsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let cors: CORSConfiguration = parse_xml_body(response.body())?;
        Ok(Self {
            cors_rules: cors.cors_rules,
        })
    }
}

impl FromS3Response for PutBucketCorsOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

impl FromS3Response for DeleteBucketCorsOutput {
    fn from_s3_response(_response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {})
    }
}

// --- Object operations ---

impl FromS3Response for PutObjectOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let headers = response.headers();
        Ok(Self {
            checksums: collect_checksums(headers),
            e_tag: header_str(headers, "etag"),
            expiration: header_str(headers, "x-amz-expiration"),
            request_charged: header_enum(headers, "x-amz-request-charged"),
            server_side_encryption: header_enum(headers, "x-amz-server-side-encryption"),
            ssekms_key_id: header_str(headers, "x-amz-server-side-encryption-aws-kms-key-id"),
            version_id: header_str(headers, "x-amz-version-id"),
        })
    }
}

fn object_metadata(headers: &HeaderMap) -> ObjectMetadata {
    ObjectMetadata {
        accept_ranges: header_str(headers, "accept-ranges"),
        cache_control: header_str(headers, "cache-control"),
        checksums: collect_checksums(headers),
        content_disposition: header_str(headers, "content-disposition"),
        content_encoding: header_str(headers, "content-encoding"),
        content_language: header_str(headers, "content-language"),
        content_length: header_parse(headers, "content-length"),
        content_range: header_str(headers, "content-range"),
        content_type: header_str(headers, "content-type"),
        delete_marker: header_bool(headers, "x-amz-delete-marker"),
        e_tag: header_str(headers, "etag"),
        expires: header_str(headers, "expires"),
        last_modified: header_timestamp(headers, "last-modified"),
        metadata: collect_metadata(headers),
        missing_meta: header_parse(headers, "x-amz-missing-meta"),
        parts_count: header_parse(headers, "x-amz-mp-parts-count"),
        request_charged: header_enum(headers, "x-amz-request-charged"),
        server_side_encryption: header_enum(headers, "x-amz-server-side-encryption"),
        storage_class: header_enum(headers, "x-amz-storage-class"),
        tag_count: header_parse(headers, "x-amz-tagging-count"),
        version_id: header_str(headers, "x-amz-version-id"),
        website_redirect_location: header_str(headers, "x-amz-website-redirect-location"),
    }
}

impl FromS3Response for GetObjectOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let (parts, body) = response.into_parts();
        Ok(Self {
            body: StreamingBlob::from(body),
            metadata: object_metadata(&parts.headers),
        })
    }
}

impl FromS3Response for HeadObjectOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            metadata: object_metadata(response.headers()),
        })
    }
}

impl FromS3Response for DeleteObjectOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let headers = response.headers();
        Ok(Self {
            delete_marker: header_bool(headers, "x-amz-delete-marker"),
            request_charged: header_enum(headers, "x-amz-request-charged"),
            version_id: header_str(headers, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for DeleteObjectsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        output.request_charged = header_enum(response.headers(), "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for CopyObjectOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        reject_embedded_error(&response)?;
        let result: Option<CopyObjectResult> = if response.body().is_empty() {
            None
        } else {
            Some(parse_xml_body(response.body())?)
        };
        let headers = response.headers();
        Ok(Self {
            copy_object_result: result,
            copy_source_version_id: header_str(headers, "x-amz-copy-source-version-id"),
            expiration: header_str(headers, "x-amz-expiration"),
            request_charged: header_enum(headers, "x-amz-request-charged"),
            server_side_encryption: header_enum(headers, "x-amz-server-side-encryption"),
            version_id: header_str(headers, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for GetObjectAclOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let policy: AccessControlPolicy = parse_xml_body(response.body())?;
        Ok(Self {
            grants: policy.grants,
            owner: policy.owner,
            request_charged: header_enum(response.headers(), "x-amz-request-charged"),
        })
    }
}

impl FromS3Response for PutObjectAclOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            request_charged: header_enum(response.headers(), "x-amz-request-charged"),
        })
    }
}

impl FromS3Response for GetObjectTaggingOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let tagging: Tagging = parse_xml_body(response.body())?;
        Ok(Self {
            tag_set: tagging.tag_set,
            version_id: header_str(response.headers(), "x-amz-version-id"),
        })
    }
}

impl FromS3Response for PutObjectTaggingOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            version_id: header_str(response.headers(), "x-amz-version-id"),
        })
    }
}

impl FromS3Response for DeleteObjectTaggingOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            version_id: header_str(response.headers(), "x-amz-version-id"),
        })
    }
}

// --- Listing operations ---

impl FromS3Response for ListObjectsV2Output {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        output.request_charged = header_enum(response.headers(), "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for ListObjectVersionsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        output.request_charged = header_enum(response.headers(), "x-amz-request-charged");
        Ok(output)
    }
}

// --- Multipart upload operations ---

impl FromS3Response for CreateMultipartUploadOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        let headers = response.headers();
        output.abort_date = header_timestamp(headers, "x-amz-abort-date");
        output.abort_rule_id = header_str(headers, "x-amz-abort-rule-id");
        output.checksum_algorithm = header_enum(headers, "x-amz-checksum-algorithm");
        output.request_charged = header_enum(headers, "x-amz-request-charged");
        output.server_side_encryption = header_enum(headers, "x-amz-server-side-encryption");
        Ok(output)
    }
}

impl FromS3Response for UploadPartOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let headers = response.headers();
        Ok(Self {
            checksums: collect_checksums(headers),
            e_tag: header_str(headers, "etag"),
            request_charged: header_enum(headers, "x-amz-request-charged"),
            server_side_encryption: header_enum(headers, "x-amz-server-side-encryption"),
        })
    }
}

impl FromS3Response for CompleteMultipartUploadOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        reject_embedded_error(&response)?;
        let mut output: Self = parse_xml_body(response.body())?;
        let headers = response.headers();
        output.expiration = header_str(headers, "x-amz-expiration");
        output.request_charged = header_enum(headers, "x-amz-request-charged");
        output.server_side_encryption = header_enum(headers, "x-amz-server-side-encryption");
        output.version_id = header_str(headers, "x-amz-version-id");
        Ok(output)
    }
}

impl FromS3Response for AbortMultipartUploadOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        Ok(Self {
            request_charged: header_enum(response.headers(), "x-amz-request-charged"),
        })
    }
}

impl FromS3Response for ListPartsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        let headers = response.headers();
        output.abort_date = header_timestamp(headers, "x-amz-abort-date");
        output.request_charged = header_enum(headers, "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for ListMultipartUploadsOutput {
    fn from_s3_response(response: http::Response<Bytes>) -> Result<Self, SdkError> {
        let mut output: Self = parse_xml_body(response.body())?;
        output.request_charged = header_enum(response.headers(), "x-amz-request-charged");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use ruststack_sdk_s3_model::types::{
        BucketLocationConstraint, Permission, RequestCharged, ServerSideEncryption, StorageClass,
    };

    use super::*;

    fn response(headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
        let mut builder = http::Response::builder().status(200);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Bytes::from_static(body.as_bytes())).unwrap()
    }

    #[test]
    fn test_should_parse_http_dates() {
        let dt = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(dt.to_rfc3339(), "1994-11-06T08:49:37+00:00");
        assert!(parse_http_date("2024-01-15T10:30:00Z").is_some());
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_should_parse_get_object_headers_and_body() {
        let resp = response(
            &[
                ("content-length", "5"),
                ("content-type", "text/plain"),
                ("etag", "\"5d41402abc4b2a76b9719d911017c592\""),
                ("last-modified", "Mon, 15 Jan 2024 10:30:00 GMT"),
                ("x-amz-meta-owner", "alice"),
                ("x-amz-version-id", "v1"),
                ("x-amz-storage-class", "STANDARD_IA"),
                ("x-amz-server-side-encryption", "AES256"),
                ("x-amz-checksum-crc32", "NhCmhg=="),
                ("x-amz-tagging-count", "2"),
            ],
            "hello",
        );
        let output = GetObjectOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.body.data.as_ref(), b"hello");
        let meta = &output.metadata;
        assert_eq!(meta.content_length, Some(5));
        assert_eq!(meta.content_type.as_deref(), Some("text/plain"));
        assert_eq!(meta.e_tag.as_deref(), Some("\"5d41402abc4b2a76b9719d911017c592\""));
        assert!(meta.last_modified.is_some());
        assert_eq!(meta.metadata.get("owner").map(String::as_str), Some("alice"));
        assert_eq!(meta.version_id.as_deref(), Some("v1"));
        assert_eq!(meta.storage_class, Some(StorageClass::StandardIa));
        assert_eq!(meta.server_side_encryption, Some(ServerSideEncryption::Aes256));
        assert_eq!(meta.checksums.crc32.as_deref(), Some("NhCmhg=="));
        assert_eq!(meta.tag_count, Some(2));
    }

    #[test]
    fn test_should_drop_unknown_enum_header() {
        let resp = response(&[("x-amz-storage-class", "FUTURE_TIER")], "");
        let output = HeadObjectOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.metadata.storage_class, None);
    }

    #[test]
    fn test_should_parse_put_object_headers() {
        let resp = response(
            &[
                ("etag", "\"abc\""),
                ("x-amz-version-id", "v2"),
                ("x-amz-request-charged", "requester"),
            ],
            "",
        );
        let output = PutObjectOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.e_tag.as_deref(), Some("\"abc\""));
        assert_eq!(output.version_id.as_deref(), Some("v2"));
        assert_eq!(output.request_charged, Some(RequestCharged::Requester));
    }

    #[test]
    fn test_should_parse_bucket_location() {
        let resp = response(
            &[],
            r#"<?xml version="1.0" encoding="UTF-8"?><LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/">eu-central-1</LocationConstraint>"#,
        );
        let output = GetBucketLocationOutput::from_s3_response(resp).unwrap();
        assert_eq!(
            output.location_constraint,
            Some(BucketLocationConstraint::EuCentral1)
        );

        let resp = response(
            &[],
            r#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        );
        let output = GetBucketLocationOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.region(), "us-east-1");
    }

    #[test]
    fn test_should_parse_bucket_acl() {
        let resp = response(
            &[],
            r#"<AccessControlPolicy>
                <Owner><ID>owner-id</ID><DisplayName>owner</DisplayName></Owner>
                <AccessControlList>
                    <Grant>
                        <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="CanonicalUser">
                            <ID>owner-id</ID>
                        </Grantee>
                        <Permission>FULL_CONTROL</Permission>
                    </Grant>
                </AccessControlList>
            </AccessControlPolicy>"#,
        );
        let output = GetBucketAclOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.owner.unwrap().id.as_deref(), Some("owner-id"));
        assert_eq!(output.grants.len(), 1);
        assert_eq!(output.grants[0].permission, Some(Permission::FullControl));
    }

    #[test]
    fn test_should_keep_bucket_policy_verbatim() {
        let body = r#"{"Version":"2012-10-17","Statement":[]}"#;
        let output = GetBucketPolicyOutput::from_s3_response(response(&[], body)).unwrap();
        assert_eq!(output.policy, body);
    }

    #[test]
    fn test_should_reject_copy_object_error_with_200() {
        let resp = response(
            &[("x-amz-request-id", "REQ")],
            "<Error><Code>InternalError</Code><Message>We encountered an internal error.</Message></Error>",
        );
        let err = CopyObjectOutput::from_s3_response(resp).unwrap_err();
        assert_eq!(err.code(), Some("InternalError"));
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_should_parse_copy_object_result() {
        let resp = response(
            &[("x-amz-copy-source-version-id", "src-v")],
            r#"<CopyObjectResult><LastModified>2024-01-15T10:30:00.000Z</LastModified><ETag>"abc"</ETag></CopyObjectResult>"#,
        );
        let output = CopyObjectOutput::from_s3_response(resp).unwrap();
        let result = output.copy_object_result.unwrap();
        assert_eq!(result.e_tag.as_deref(), Some("\"abc\""));
        assert!(result.last_modified.is_some());
        assert_eq!(output.copy_source_version_id.as_deref(), Some("src-v"));
    }

    #[test]
    fn test_should_reject_complete_multipart_error_with_200() {
        let resp = response(&[], "<Error><Code>SlowDown</Code></Error>");
        let err = CompleteMultipartUploadOutput::from_s3_response(resp).unwrap_err();
        assert_eq!(err.code(), Some("SlowDown"));
    }

    #[test]
    fn test_should_merge_headers_into_complete_multipart_output() {
        let resp = response(
            &[("x-amz-version-id", "v9")],
            r#"<CompleteMultipartUploadResult><Location>https://b.s3.amazonaws.com/k</Location><Bucket>b</Bucket><Key>k</Key><ETag>"x-2"</ETag></CompleteMultipartUploadResult>"#,
        );
        let output = CompleteMultipartUploadOutput::from_s3_response(resp).unwrap();
        assert_eq!(output.bucket.as_deref(), Some("b"));
        assert_eq!(output.e_tag.as_deref(), Some("\"x-2\""));
        assert_eq!(output.version_id.as_deref(), Some("v9"));
    }

    #[test]
    fn test_should_treat_empty_tagging_body_as_empty_set() {
        let output = GetObjectTaggingOutput::from_s3_response(response(&[], "")).unwrap();
        assert!(output.tag_set.is_empty());
    }
}
