//! S3 Input struct to HTTP request serialization.
//!
//! Each input implements [`IntoS3Request`], which validates the input and
//! maps its members onto an [`S3HttpRequest`]: URI labels (bucket, key),
//! query parameters, headers and the payload. [`S3HttpRequest::into_http`]
//! then applies bucket addressing against a resolved endpoint.

use std::collections::HashMap;
use std::fmt::Display;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use ruststack_sdk_auth::canonical::{uri_encode, uri_encode_path};
use ruststack_sdk_core::{Endpoint, SdkError};
use ruststack_sdk_s3_model::S3Operation;
use ruststack_sdk_s3_model::types::ChecksumAlgorithm;
use ruststack_sdk_s3_xml::{S3Serialize, to_xml};

use crate::addressing::{Addressing, select_addressing};
use crate::checksums::{compute_checksum, compute_content_md5};
use crate::response::FromS3Response;

/// Trait for converting an S3 input struct into an HTTP request.
pub trait IntoS3Request {
    /// Output type parsed from the response.
    type Output: FromS3Response;

    /// Operation this input belongs to.
    const OPERATION: S3Operation;

    /// Validate the input and map it onto an [`S3HttpRequest`].
    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError>;
}

/// An S3 request before bucket addressing is applied.
#[derive(Debug, Clone)]
pub struct S3HttpRequest {
    /// Operation being sent.
    pub operation: S3Operation,
    /// HTTP method.
    pub method: Method,
    /// Bucket URI label.
    pub bucket: Option<String>,
    /// Object key URI label (unencoded).
    pub key: Option<String>,
    /// Query parameters in insertion order; `None` renders a bare subresource.
    pub query: Vec<(String, Option<String>)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Payload.
    pub body: Bytes,
}

impl S3HttpRequest {
    /// Start a request for `operation`.
    #[must_use]
    pub fn new(operation: S3Operation, method: Method) -> Self {
        Self {
            operation,
            method,
            bucket: None,
            key: None,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set the bucket label.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the key label.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add a bare subresource such as `?acl`.
    pub fn subresource(&mut self, name: &str) {
        self.query.push((name.to_owned(), None));
    }

    /// Add a query parameter.
    pub fn query(&mut self, name: &str, value: impl Display) {
        self.query.push((name.to_owned(), Some(value.to_string())));
    }

    /// Add a query parameter when `value` is present.
    pub fn opt_query(&mut self, name: &str, value: Option<impl Display>) {
        if let Some(v) = value {
            self.query(name, v);
        }
    }

    /// Set a header.
    pub fn header(&mut self, name: &str, value: impl Display) -> Result<(), SdkError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SdkError::Request(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_bytes(value.to_string().as_bytes())
            .map_err(|e| SdkError::Request(format!("invalid value for header {name}: {e}")))?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Set a header when `value` is present.
    pub fn opt_header(&mut self, name: &str, value: Option<impl Display>) -> Result<(), SdkError> {
        match value {
            Some(v) => self.header(name, v),
            None => Ok(()),
        }
    }

    /// Set an HTTP-date header when `value` is present.
    pub fn opt_date_header(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), SdkError> {
        self.opt_header(name, value.map(format_http_date))
    }

    /// Set one `x-amz-meta-*` header per metadata entry.
    pub fn metadata_headers(&mut self, metadata: &HashMap<String, String>) -> Result<(), SdkError> {
        for (name, value) in metadata {
            self.header(&format!("x-amz-meta-{name}"), value)?;
        }
        Ok(())
    }

    /// Serialize `value` as the XML payload rooted at `root`.
    pub fn xml_body<T: S3Serialize>(&mut self, root: &str, value: &T) -> Result<(), SdkError> {
        let xml = to_xml(root, value).map_err(|e| SdkError::Request(e.to_string()))?;
        self.body = Bytes::from(xml);
        self.header("content-type", "application/xml")
    }

    /// Set `Content-MD5` from the current payload unless the caller supplied one.
    pub fn content_md5(&mut self, supplied: Option<&str>) -> Result<(), SdkError> {
        match supplied {
            Some(v) => self.header("content-md5", v),
            None => self.header("content-md5", compute_content_md5(&self.body)),
        }
    }

    /// Set the `x-amz-checksum-*` header for `algorithm` from the current payload.
    pub fn payload_checksum(&mut self, algorithm: Option<ChecksumAlgorithm>) -> Result<(), SdkError> {
        if let Some(algorithm) = algorithm {
            self.header("x-amz-sdk-checksum-algorithm", algorithm)?;
            self.header(algorithm.header_name(), compute_checksum(algorithm, &self.body))?;
        }
        Ok(())
    }

    /// Addressing mode this request would use on `endpoint`.
    #[must_use]
    pub fn addressing(&self, endpoint: &Endpoint, force_path_style: bool) -> Addressing {
        match &self.bucket {
            Some(bucket) => select_addressing(bucket, &endpoint.authority, force_path_style),
            None => Addressing::PathStyle,
        }
    }

    /// Full request URI on `endpoint`.
    pub fn uri(&self, endpoint: &Endpoint, force_path_style: bool) -> Result<http::Uri, SdkError> {
        let (authority, mut path) = match (self.addressing(endpoint, force_path_style), &self.bucket)
        {
            (Addressing::VirtualHosted, Some(bucket)) => {
                (format!("{bucket}.{}", endpoint.authority), "/".to_owned())
            }
            (_, Some(bucket)) => (
                endpoint.authority.clone(),
                format!("/{}", uri_encode(bucket)),
            ),
            (_, None) => (endpoint.authority.clone(), "/".to_owned()),
        };
        if let Some(key) = &self.key {
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(&uri_encode_path(key));
        }

        let mut uri = format!("{}://{authority}{path}", endpoint.scheme);
        if !self.query.is_empty() {
            uri.push('?');
            uri.push_str(&self.query_string());
        }
        uri.parse()
            .map_err(|e| SdkError::Request(format!("invalid request uri {uri:?}: {e}")))
    }

    fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(name, value)| match value {
                Some(v) => format!("{}={}", uri_encode(name), uri_encode(v)),
                None => uri_encode(name),
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Build the `http::Request` sent to `endpoint`.
    pub fn into_http(
        self,
        endpoint: &Endpoint,
        force_path_style: bool,
    ) -> Result<http::Request<Bytes>, SdkError> {
        let uri = self.uri(endpoint, force_path_style)?;
        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body)
            .map_err(|e| SdkError::Request(e.to_string()))?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

/// Format a timestamp as an HTTP-date (`Sun, 06 Nov 1994 08:49:37 GMT`).
#[must_use]
pub fn format_http_date(value: &DateTime<Utc>) -> String {
    value.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Percent-encode a `bucket/key[?versionId=...]` copy source.
fn encode_copy_source(copy_source: &str) -> String {
    let source = copy_source.trim_start_matches('/');
    match source.split_once("?versionId=") {
        Some((path, version)) => format!("{}?versionId={}", uri_encode_path(path), uri_encode(version)),
        None => uri_encode_path(source),
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

#[allow(clippy::wildcard_imports)]
use ruststack_sdk_s3_model::input::*;
#[allow(clippy::wildcard_imports)]
use ruststack_sdk_s3_model::output::*;

fn bucket_request(op: S3Operation, method: Method, bucket: String) -> S3HttpRequest {
    S3HttpRequest::new(op, method).with_bucket(bucket)
}

fn object_request(op: S3Operation, method: Method, bucket: String, key: String) -> S3HttpRequest {
    S3HttpRequest::new(op, method).with_bucket(bucket).with_key(key)
}

/// Bucket operation carrying only a subresource and the expected owner.
fn bucket_subresource(
    op: S3Operation,
    method: Method,
    bucket: String,
    subresource: &str,
    expected_bucket_owner: Option<&str>,
) -> Result<S3HttpRequest, SdkError> {
    let mut req = bucket_request(op, method, bucket);
    req.subresource(subresource);
    req.opt_header("x-amz-expected-bucket-owner", expected_bucket_owner)?;
    Ok(req)
}

// --- Bucket operations ---

impl IntoS3Request for CreateBucketInput {
    type Output = CreateBucketOutput;
    const OPERATION: S3Operation = S3Operation::CreateBucket;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::PUT, self.bucket);
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.opt_header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.opt_header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.opt_header("x-amz-grant-write", self.grant_write.as_deref())?;
        req.opt_header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.opt_header(
            "x-amz-bucket-object-lock-enabled",
            self.object_lock_enabled_for_bucket.map(bool_str),
        )?;
        req.opt_header("x-amz-object-ownership", self.object_ownership)?;
        if let Some(configuration) = &self.create_bucket_configuration {
            if configuration.location_constraint.is_some() {
                req.xml_body("CreateBucketConfiguration", configuration)?;
            }
        }
        Ok(req)
    }
}

impl IntoS3Request for DeleteBucketInput {
    type Output = DeleteBucketOutput;
    const OPERATION: S3Operation = S3Operation::DeleteBucket;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::DELETE, self.bucket);
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(req)
    }
}

impl IntoS3Request for HeadBucketInput {
    type Output = HeadBucketOutput;
    const OPERATION: S3Operation = S3Operation::HeadBucket;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::HEAD, self.bucket);
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(req)
    }
}

impl IntoS3Request for ListBucketsInput {
    type Output = ListBucketsOutput;
    const OPERATION: S3Operation = S3Operation::ListBuckets;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = S3HttpRequest::new(Self::OPERATION, Method::GET);
        req.opt_query("bucket-region", self.bucket_region.as_deref());
        req.opt_query("continuation-token", self.continuation_token.as_deref());
        req.opt_query("max-buckets", self.max_buckets);
        req.opt_query("prefix", self.prefix.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for GetBucketLocationInput {
    type Output = GetBucketLocationOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketLocation;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "location",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for GetBucketAclInput {
    type Output = GetBucketAclOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketAcl;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "acl",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for PutBucketAclInput {
    type Output = PutBucketAclOutput;
    const OPERATION: S3Operation = S3Operation::PutBucketAcl;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::PUT,
            self.bucket,
            "acl",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.opt_header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.opt_header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.opt_header("x-amz-grant-write", self.grant_write.as_deref())?;
        req.opt_header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        if let Some(policy) = &self.access_control_policy {
            req.xml_body("AccessControlPolicy", policy)?;
        }
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for GetBucketVersioningInput {
    type Output = GetBucketVersioningOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketVersioning;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "versioning",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for PutBucketVersioningInput {
    type Output = PutBucketVersioningOutput;
    const OPERATION: S3Operation = S3Operation::PutBucketVersioning;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::PUT,
            self.bucket,
            "versioning",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.opt_header("x-amz-mfa", self.mfa.as_deref())?;
        req.xml_body("VersioningConfiguration", &self.versioning_configuration)?;
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for GetBucketTaggingInput {
    type Output = GetBucketTaggingOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "tagging",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for PutBucketTaggingInput {
    type Output = PutBucketTaggingOutput;
    const OPERATION: S3Operation = S3Operation::PutBucketTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::PUT,
            self.bucket,
            "tagging",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.xml_body("Tagging", &self.tagging)?;
        req.content_md5(None)?;
        req.payload_checksum(self.checksum_algorithm)?;
        Ok(req)
    }
}

impl IntoS3Request for DeleteBucketTaggingInput {
    type Output = DeleteBucketTaggingOutput;
    const OPERATION: S3Operation = S3Operation::DeleteBucketTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::DELETE,
            self.bucket,
            "tagging",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for GetBucketPolicyInput {
    type Output = GetBucketPolicyOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketPolicy;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "policy",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for PutBucketPolicyInput {
    type Output = PutBucketPolicyOutput;
    const OPERATION: S3Operation = S3Operation::PutBucketPolicy;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::PUT,
            self.bucket,
            "policy",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.opt_header(
            "x-amz-confirm-remove-self-bucket-access",
            self.confirm_remove_self_bucket_access.map(bool_str),
        )?;
        req.header("content-type", "application/json")?;
        req.body = Bytes::from(self.policy);
        Ok(req)
    }
}

impl IntoS3Request for DeleteBucketPolicyInput {
    type Output = DeleteBucketPolicyOutput;
    const OPERATION: S3Operation = S3Operation::DeleteBucketPolicy;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::DELETE,
            self.bucket,
            "policy",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for GetBucketCorsInput {
    type Output = GetBucketCorsOutput;
    const OPERATION: S3Operation = S3Operation::GetBucketCors;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::GET,
            self.bucket,
            "cors",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

impl IntoS3Request for PutBucketCorsInput {
    type Output = PutBucketCorsOutput;
    const OPERATION: S3Operation = S3Operation::PutBucketCors;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::PUT,
            self.bucket,
            "cors",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.xml_body("CORSConfiguration", &self.cors_configuration)?;
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for DeleteBucketCorsInput {
    type Output = DeleteBucketCorsOutput;
    const OPERATION: S3Operation = S3Operation::DeleteBucketCors;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        bucket_subresource(
            Self::OPERATION,
            Method::DELETE,
            self.bucket,
            "cors",
            self.expected_bucket_owner.as_deref(),
        )
    }
}

// --- Object operations ---

impl IntoS3Request for PutObjectInput {
    type Output = PutObjectOutput;
    const OPERATION: S3Operation = S3Operation::PutObject;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::PUT, self.bucket, self.key);
        req.body = self.body.into_bytes();
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("cache-control", self.cache_control.as_deref())?;
        req.opt_header("content-disposition", self.content_disposition.as_deref())?;
        req.opt_header("content-encoding", self.content_encoding.as_deref())?;
        req.opt_header("content-language", self.content_language.as_deref())?;
        req.opt_header("content-type", self.content_type.as_deref())?;
        if self.content_md5.is_some() || self.compute_content_md5 {
            req.content_md5(self.content_md5.as_deref())?;
        }
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_date_header("expires", self.expires.as_ref())?;
        req.opt_header("if-match", self.if_match.as_deref())?;
        req.opt_header("if-none-match", self.if_none_match.as_deref())?;
        req.metadata_headers(&self.metadata)?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_header("x-amz-server-side-encryption", self.server_side_encryption)?;
        req.opt_header(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        req.opt_header("x-amz-storage-class", self.storage_class)?;
        req.opt_header("x-amz-tagging", self.tagging.as_deref())?;
        req.opt_header(
            "x-amz-website-redirect-location",
            self.website_redirect_location.as_deref(),
        )?;
        req.payload_checksum(self.checksum_algorithm)?;
        Ok(req)
    }
}

impl IntoS3Request for GetObjectInput {
    type Output = GetObjectOutput;
    const OPERATION: S3Operation = S3Operation::GetObject;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::GET, self.bucket, self.key);
        req.opt_header("x-amz-checksum-mode", self.checksum_mode)?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("if-match", self.if_match.as_deref())?;
        req.opt_date_header("if-modified-since", self.if_modified_since.as_ref())?;
        req.opt_header("if-none-match", self.if_none_match.as_deref())?;
        req.opt_date_header("if-unmodified-since", self.if_unmodified_since.as_ref())?;
        req.opt_header("range", self.range.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_query("partNumber", self.part_number);
        req.opt_query("response-cache-control", self.response_cache_control.as_deref());
        req.opt_query(
            "response-content-disposition",
            self.response_content_disposition.as_deref(),
        );
        req.opt_query("response-content-type", self.response_content_type.as_deref());
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for HeadObjectInput {
    type Output = HeadObjectOutput;
    const OPERATION: S3Operation = S3Operation::HeadObject;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::HEAD, self.bucket, self.key);
        req.opt_header("x-amz-checksum-mode", self.checksum_mode)?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("if-match", self.if_match.as_deref())?;
        req.opt_date_header("if-modified-since", self.if_modified_since.as_ref())?;
        req.opt_header("if-none-match", self.if_none_match.as_deref())?;
        req.opt_date_header("if-unmodified-since", self.if_unmodified_since.as_ref())?;
        req.opt_header("range", self.range.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_query("partNumber", self.part_number);
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for DeleteObjectInput {
    type Output = DeleteObjectOutput;
    const OPERATION: S3Operation = S3Operation::DeleteObject;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::DELETE, self.bucket, self.key);
        req.opt_header(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention.map(bool_str),
        )?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-mfa", self.mfa.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for DeleteObjectsInput {
    type Output = DeleteObjectsOutput;
    const OPERATION: S3Operation = S3Operation::DeleteObjects;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_subresource(
            Self::OPERATION,
            Method::POST,
            self.bucket,
            "delete",
            self.expected_bucket_owner.as_deref(),
        )?;
        req.opt_header(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention.map(bool_str),
        )?;
        req.opt_header("x-amz-mfa", self.mfa.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.xml_body("Delete", &self.delete)?;
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for CopyObjectInput {
    type Output = CopyObjectOutput;
    const OPERATION: S3Operation = S3Operation::CopyObject;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::PUT, self.bucket, self.key);
        req.header("x-amz-copy-source", encode_copy_source(&self.copy_source))?;
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("x-amz-checksum-algorithm", self.checksum_algorithm)?;
        req.opt_header("content-type", self.content_type.as_deref())?;
        req.opt_header("x-amz-copy-source-if-match", self.copy_source_if_match.as_deref())?;
        req.opt_date_header(
            "x-amz-copy-source-if-modified-since",
            self.copy_source_if_modified_since.as_ref(),
        )?;
        req.opt_header(
            "x-amz-copy-source-if-none-match",
            self.copy_source_if_none_match.as_deref(),
        )?;
        req.opt_date_header(
            "x-amz-copy-source-if-unmodified-since",
            self.copy_source_if_unmodified_since.as_ref(),
        )?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.metadata_headers(&self.metadata)?;
        req.opt_header("x-amz-metadata-directive", self.metadata_directive)?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_header("x-amz-server-side-encryption", self.server_side_encryption)?;
        req.opt_header("x-amz-storage-class", self.storage_class)?;
        req.opt_header("x-amz-tagging", self.tagging.as_deref())?;
        req.opt_header("x-amz-tagging-directive", self.tagging_directive)?;
        Ok(req)
    }
}

impl IntoS3Request for GetObjectAclInput {
    type Output = GetObjectAclOutput;
    const OPERATION: S3Operation = S3Operation::GetObjectAcl;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::GET, self.bucket, self.key);
        req.subresource("acl");
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for PutObjectAclInput {
    type Output = PutObjectAclOutput;
    const OPERATION: S3Operation = S3Operation::PutObjectAcl;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::PUT, self.bucket, self.key);
        req.subresource("acl");
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.opt_header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.opt_header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.opt_header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_query("versionId", self.version_id.as_deref());
        if let Some(policy) = &self.access_control_policy {
            req.xml_body("AccessControlPolicy", policy)?;
        }
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for GetObjectTaggingInput {
    type Output = GetObjectTaggingOutput;
    const OPERATION: S3Operation = S3Operation::GetObjectTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::GET, self.bucket, self.key);
        req.subresource("tagging");
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

impl IntoS3Request for PutObjectTaggingInput {
    type Output = PutObjectTaggingOutput;
    const OPERATION: S3Operation = S3Operation::PutObjectTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::PUT, self.bucket, self.key);
        req.subresource("tagging");
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_query("versionId", self.version_id.as_deref());
        req.xml_body("Tagging", &self.tagging)?;
        req.content_md5(None)?;
        Ok(req)
    }
}

impl IntoS3Request for DeleteObjectTaggingInput {
    type Output = DeleteObjectTaggingOutput;
    const OPERATION: S3Operation = S3Operation::DeleteObjectTagging;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::DELETE, self.bucket, self.key);
        req.subresource("tagging");
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_query("versionId", self.version_id.as_deref());
        Ok(req)
    }
}

// --- Listing operations ---

impl IntoS3Request for ListObjectsV2Input {
    type Output = ListObjectsV2Output;
    const OPERATION: S3Operation = S3Operation::ListObjectsV2;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::GET, self.bucket);
        req.query("list-type", 2);
        req.opt_query("continuation-token", self.continuation_token.as_deref());
        req.opt_query("delimiter", self.delimiter.as_deref());
        req.opt_query("encoding-type", self.encoding_type);
        req.opt_query("fetch-owner", self.fetch_owner);
        req.opt_query("max-keys", self.max_keys);
        req.opt_query("prefix", self.prefix.as_deref());
        req.opt_query("start-after", self.start_after.as_deref());
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        Ok(req)
    }
}

impl IntoS3Request for ListObjectVersionsInput {
    type Output = ListObjectVersionsOutput;
    const OPERATION: S3Operation = S3Operation::ListObjectVersions;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::GET, self.bucket);
        req.subresource("versions");
        req.opt_query("delimiter", self.delimiter.as_deref());
        req.opt_query("encoding-type", self.encoding_type);
        req.opt_query("key-marker", self.key_marker.as_deref());
        req.opt_query("max-keys", self.max_keys);
        req.opt_query("prefix", self.prefix.as_deref());
        req.opt_query("version-id-marker", self.version_id_marker.as_deref());
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        Ok(req)
    }
}

// --- Multipart upload operations ---

impl IntoS3Request for CreateMultipartUploadInput {
    type Output = CreateMultipartUploadOutput;
    const OPERATION: S3Operation = S3Operation::CreateMultipartUpload;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::POST, self.bucket, self.key);
        req.subresource("uploads");
        req.opt_header("x-amz-acl", self.acl)?;
        req.opt_header("cache-control", self.cache_control.as_deref())?;
        req.opt_header("x-amz-checksum-algorithm", self.checksum_algorithm)?;
        req.opt_header("content-disposition", self.content_disposition.as_deref())?;
        req.opt_header("content-encoding", self.content_encoding.as_deref())?;
        req.opt_header("content-type", self.content_type.as_deref())?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_date_header("expires", self.expires.as_ref())?;
        req.metadata_headers(&self.metadata)?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.opt_header("x-amz-server-side-encryption", self.server_side_encryption)?;
        req.opt_header("x-amz-storage-class", self.storage_class)?;
        req.opt_header("x-amz-tagging", self.tagging.as_deref())?;
        Ok(req)
    }
}

impl IntoS3Request for UploadPartInput {
    type Output = UploadPartOutput;
    const OPERATION: S3Operation = S3Operation::UploadPart;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::PUT, self.bucket, self.key);
        req.query("partNumber", self.part_number);
        req.query("uploadId", &self.upload_id);
        req.body = self.body.into_bytes();
        req.opt_header("content-md5", self.content_md5.as_deref())?;
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.payload_checksum(self.checksum_algorithm)?;
        Ok(req)
    }
}

impl IntoS3Request for CompleteMultipartUploadInput {
    type Output = CompleteMultipartUploadOutput;
    const OPERATION: S3Operation = S3Operation::CompleteMultipartUpload;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::POST, self.bucket, self.key);
        req.query("uploadId", &self.upload_id);
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("if-none-match", self.if_none_match.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        req.xml_body("CompleteMultipartUpload", &self.multipart_upload)?;
        Ok(req)
    }
}

impl IntoS3Request for AbortMultipartUploadInput {
    type Output = AbortMultipartUploadOutput;
    const OPERATION: S3Operation = S3Operation::AbortMultipartUpload;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::DELETE, self.bucket, self.key);
        req.query("uploadId", &self.upload_id);
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        Ok(req)
    }
}

impl IntoS3Request for ListPartsInput {
    type Output = ListPartsOutput;
    const OPERATION: S3Operation = S3Operation::ListParts;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = object_request(Self::OPERATION, Method::GET, self.bucket, self.key);
        req.query("uploadId", &self.upload_id);
        req.opt_query("max-parts", self.max_parts);
        req.opt_query("part-number-marker", self.part_number_marker.as_deref());
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        Ok(req)
    }
}

impl IntoS3Request for ListMultipartUploadsInput {
    type Output = ListMultipartUploadsOutput;
    const OPERATION: S3Operation = S3Operation::ListMultipartUploads;

    fn into_s3_request(self) -> Result<S3HttpRequest, SdkError> {
        self.validate()?;
        let mut req = bucket_request(Self::OPERATION, Method::GET, self.bucket);
        req.subresource("uploads");
        req.opt_query("delimiter", self.delimiter.as_deref());
        req.opt_query("encoding-type", self.encoding_type);
        req.opt_query("key-marker", self.key_marker.as_deref());
        req.opt_query("max-uploads", self.max_uploads);
        req.opt_query("prefix", self.prefix.as_deref());
        req.opt_query("upload-id-marker", self.upload_id_marker.as_deref());
        req.opt_header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.opt_header("x-amz-request-payer", self.request_payer)?;
        Ok(req)
    }
}
