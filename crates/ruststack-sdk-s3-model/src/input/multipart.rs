use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ruststack_sdk_core::SdkError;

use super::{PART_NUMBER_RANGE, invalid, require, validate_max_keys};
use crate::S3Operation;
use crate::request::StreamingBlob;
use crate::types::{
    ChecksumAlgorithm, CompletedMultipartUpload, EncodingType, ObjectCannedACL, RequestPayer,
    ServerSideEncryption, StorageClass,
};

fn validate_part_number(op: S3Operation, part_number: i32) -> Result<(), SdkError> {
    if PART_NUMBER_RANGE.contains(&part_number) {
        Ok(())
    } else {
        Err(invalid(
            op,
            format!("part number must be between 1 and 10000, got {part_number}"),
        ))
    }
}

/// S3 CreateMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadInput {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedACL>,
    pub bucket: String,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    pub key: String,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging`.
    pub tagging: Option<String>,
}

impl CreateMultipartUploadInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::CreateMultipartUpload, "Bucket", &self.bucket)?;
        require(S3Operation::CreateMultipartUpload, "Key", &self.key)
    }
}

/// S3 UploadPartInput.
#[derive(Debug, Clone, Default)]
pub struct UploadPartInput {
    /// HTTP payload.
    pub body: StreamingBlob,
    pub bucket: String,
    /// When set, the checksum is computed and sent as `x-amz-checksum-*`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP query: `partNumber`.
    pub part_number: i32,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}

impl UploadPartInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::UploadPart;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        require(op, "UploadId", &self.upload_id)?;
        validate_part_number(op, self.part_number)
    }
}

/// S3 CompleteMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    pub key: String,
    /// HTTP payload.
    pub multipart_upload: CompletedMultipartUpload,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}

impl CompleteMultipartUploadInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::CompleteMultipartUpload;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        require(op, "UploadId", &self.upload_id)?;
        let parts = &self.multipart_upload.parts;
        if parts.is_empty() {
            return Err(SdkError::missing_field(op.as_str(), "MultipartUpload.Parts"));
        }
        let mut previous = 0;
        for part in parts {
            let number = part
                .part_number
                .ok_or_else(|| SdkError::missing_field(op.as_str(), "Part.PartNumber"))?;
            validate_part_number(op, number)?;
            if number <= previous {
                return Err(invalid(op, "parts must be listed in ascending part number order"));
            }
            previous = number;
            if part.e_tag.as_deref().is_none_or(str::is_empty) {
                return Err(SdkError::missing_field(op.as_str(), "Part.ETag"));
            }
        }
        Ok(())
    }
}

/// S3 AbortMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct AbortMultipartUploadInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}

impl AbortMultipartUploadInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::AbortMultipartUpload;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        require(op, "UploadId", &self.upload_id)
    }
}

/// S3 ListPartsInput.
#[derive(Debug, Clone, Default)]
pub struct ListPartsInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    pub key: String,
    /// HTTP query: `max-parts`.
    pub max_parts: Option<i32>,
    /// HTTP query: `part-number-marker`.
    pub part_number_marker: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}

impl ListPartsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::ListParts;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Key", &self.key)?;
        require(op, "UploadId", &self.upload_id)?;
        validate_max_keys(op, self.max_parts)
    }
}

/// S3 ListMultipartUploadsInput.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsInput {
    pub bucket: String,
    /// HTTP query: `delimiter`.
    pub delimiter: Option<String>,
    /// HTTP query: `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP query: `key-marker`.
    pub key_marker: Option<String>,
    /// HTTP query: `max-uploads`.
    pub max_uploads: Option<i32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `upload-id-marker`.
    pub upload_id_marker: Option<String>,
}

impl ListMultipartUploadsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::ListMultipartUploads, "Bucket", &self.bucket)?;
        validate_max_keys(S3Operation::ListMultipartUploads, self.max_uploads)
    }
}
