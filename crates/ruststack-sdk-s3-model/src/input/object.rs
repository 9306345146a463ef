use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ruststack_sdk_core::SdkError;

use super::{MAX_DELETE_OBJECTS, MAX_OBJECT_TAGS, invalid, require, validate_policy, validate_tags};
use crate::S3Operation;
use crate::request::StreamingBlob;
use crate::types::{
    AccessControlPolicy, ChecksumAlgorithm, ChecksumMode, Delete, MetadataDirective,
    ObjectCannedACL, RequestPayer, ServerSideEncryption, StorageClass, TaggingDirective, Tagging,
};

fn validate_metadata(op: S3Operation, metadata: &HashMap<String, String>) -> Result<(), SdkError> {
    for name in metadata.keys() {
        if name.is_empty() {
            return Err(invalid(op, "metadata names must not be empty"));
        }
        if !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        {
            return Err(invalid(op, format!("metadata name `{name}` is not a valid header token")));
        }
    }
    Ok(())
}

/// S3 PutObjectInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    /// HTTP payload.
    pub body: StreamingBlob,
    pub bucket: String,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// When set, the checksum is computed and sent as `x-amz-checksum-*`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-MD5`. Computed when absent and `compute_content_md5` is set.
    pub content_md5: Option<String>,
    pub compute_content_md5: bool,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    pub key: String,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging` (URL query encoded).
    pub tagging: Option<String>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

impl PutObjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutObject;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        validate_metadata(op, &self.metadata)?;
        if self.ssekms_key_id.is_some()
            && !matches!(
                self.server_side_encryption,
                Some(ServerSideEncryption::AwsKms | ServerSideEncryption::AwsKmsDsse)
            )
        {
            return Err(invalid(
                op,
                "a KMS key id requires aws:kms or aws:kms:dsse server side encryption",
            ));
        }
        Ok(())
    }
}

/// S3 GetObjectInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    pub bucket: String,
    /// HTTP header: `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-Modified-Since`.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP header: `If-Unmodified-Since`.
    pub if_unmodified_since: Option<DateTime<Utc>>,
    pub key: String,
    /// HTTP query: `partNumber`.
    pub part_number: Option<i32>,
    /// HTTP header: `Range`.
    pub range: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `response-cache-control`.
    pub response_cache_control: Option<String>,
    /// HTTP query: `response-content-disposition`.
    pub response_content_disposition: Option<String>,
    /// HTTP query: `response-content-type`.
    pub response_content_type: Option<String>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::GetObject;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        if let Some(range) = &self.range {
            if !range.starts_with("bytes=") {
                return Err(invalid(op, format!("range `{range}` must start with `bytes=`")));
            }
        }
        if self.range.is_some() && self.part_number.is_some() {
            return Err(invalid(op, "range and part number are mutually exclusive"));
        }
        Ok(())
    }
}

/// S3 HeadObjectInput.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectInput {
    pub bucket: String,
    /// HTTP header: `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-Modified-Since`.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP header: `If-Unmodified-Since`.
    pub if_unmodified_since: Option<DateTime<Utc>>,
    pub key: String,
    /// HTTP query: `partNumber`.
    pub part_number: Option<i32>,
    /// HTTP header: `Range`.
    pub range: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl HeadObjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::HeadObject, "Bucket", &self.bucket)?;
        require(S3Operation::HeadObject, "Key", &self.key)
    }
}

/// S3 DeleteObjectInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectInput {
    pub bucket: String,
    /// HTTP header: `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl DeleteObjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteObject, "Bucket", &self.bucket)?;
        require(S3Operation::DeleteObject, "Key", &self.key)
    }
}

/// S3 DeleteObjectsInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsInput {
    pub bucket: String,
    /// HTTP header: `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// HTTP payload.
    pub delete: Delete,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

impl DeleteObjectsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::DeleteObjects;
        require(op, "Bucket", &self.bucket)?;
        let objects = &self.delete.objects;
        if objects.is_empty() {
            return Err(SdkError::missing_field(op.as_str(), "Delete.Objects"));
        }
        if objects.len() > MAX_DELETE_OBJECTS {
            return Err(invalid(
                op,
                format!(
                    "at most {MAX_DELETE_OBJECTS} keys can be deleted at once, got {}",
                    objects.len()
                ),
            ));
        }
        for object in objects {
            require(op, "Object.Key", &object.key)?;
        }
        Ok(())
    }
}

/// S3 CopyObjectInput.
#[derive(Debug, Clone, Default)]
pub struct CopyObjectInput {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    pub bucket: String,
    /// HTTP header: `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-copy-source`, as `source-bucket/source-key[?versionId=id]`.
    pub copy_source: String,
    /// HTTP header: `x-amz-copy-source-if-match`.
    pub copy_source_if_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-modified-since`.
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-copy-source-if-none-match`.
    pub copy_source_if_none_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-unmodified-since`.
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-metadata-directive`.
    pub metadata_directive: Option<MetadataDirective>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging`.
    pub tagging: Option<String>,
    /// HTTP header: `x-amz-tagging-directive`.
    pub tagging_directive: Option<TaggingDirective>,
}

impl CopyObjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::CopyObject;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        require(op, "CopySource", &self.copy_source)?;
        let source = self.copy_source.trim_start_matches('/');
        match source.split_once('/') {
            Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {}
            _ => {
                return Err(invalid(
                    op,
                    format!("copy source `{}` must be `bucket/key`", self.copy_source),
                ));
            }
        }
        if !self.metadata.is_empty() && self.metadata_directive != Some(MetadataDirective::Replace)
        {
            return Err(invalid(op, "metadata is only applied with metadata directive REPLACE"));
        }
        validate_metadata(op, &self.metadata)
    }
}

/// S3 GetObjectAclInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectAclInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectAclInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetObjectAcl, "Bucket", &self.bucket)?;
        require(S3Operation::GetObjectAcl, "Key", &self.key)
    }
}

/// S3 PutObjectAclInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectAclInput {
    /// HTTP payload.
    pub access_control_policy: Option<AccessControlPolicy>,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    pub key: String,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectAclInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutObjectAcl;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        if let Some(policy) = &self.access_control_policy {
            validate_policy(op, policy)?;
        }
        Ok(())
    }
}

/// S3 GetObjectTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl GetObjectTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetObjectTagging, "Bucket", &self.bucket)?;
        require(S3Operation::GetObjectTagging, "Key", &self.key)
    }
}

/// S3 PutObjectTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP payload.
    pub tagging: Tagging,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl PutObjectTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutObjectTagging;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        validate_tags(op, &self.tagging.tag_set, MAX_OBJECT_TAGS)
    }
}

/// S3 DeleteObjectTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

impl DeleteObjectTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteObjectTagging, "Bucket", &self.bucket)?;
        require(S3Operation::DeleteObjectTagging, "Key", &self.key)
    }
}
