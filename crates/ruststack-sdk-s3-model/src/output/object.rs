use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::request::StreamingBlob;
use crate::types::{
    Checksums, CopyObjectResult, DeletedObject, Error, Grant, Owner, RequestCharged,
    ServerSideEncryption, StorageClass, Tag,
};

/// S3 PutObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// HTTP headers: `x-amz-checksum-*`.
    pub checksums: Checksums,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Object metadata returned by both `GetObject` and `HeadObject`.
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP headers: `x-amz-checksum-*`.
    pub checksums: Checksums,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `Content-Range`.
    pub content_range: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `Expires`, kept verbatim.
    pub expires: Option<String>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

/// S3 GetObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectOutput {
    /// HTTP payload.
    pub body: StreamingBlob,
    pub metadata: ObjectMetadata,
}

/// S3 HeadObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectOutput {
    pub metadata: ObjectMetadata,
}

/// S3 DeleteObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// S3 DeleteObjectsOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {
    pub deleted: Vec<DeletedObject>,
    /// Keys that could not be deleted.
    pub errors: Vec<Error>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// S3 CopyObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct CopyObjectOutput {
    /// HTTP payload.
    pub copy_object_result: Option<CopyObjectResult>,
    /// HTTP header: `x-amz-copy-source-version-id`.
    pub copy_source_version_id: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// S3 GetObjectAclOutput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectAclOutput {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// S3 PutObjectAclOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectAclOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// S3 GetObjectTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectTaggingOutput {
    pub tag_set: Vec<Tag>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// S3 PutObjectTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// S3 DeleteObjectTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}
