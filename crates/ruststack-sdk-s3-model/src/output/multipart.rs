use chrono::{DateTime, Utc};
use ruststack_sdk_core::PageableResponse;

use super::non_empty;
use crate::types::{
    ChecksumAlgorithm, Checksums, CommonPrefix, EncodingType, Initiator, MultipartUpload, Owner,
    Part, RequestCharged, ServerSideEncryption, StorageClass,
};

/// S3 CreateMultipartUploadOutput.
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadOutput {
    /// HTTP header: `x-amz-abort-date`.
    pub abort_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-abort-rule-id`.
    pub abort_rule_id: Option<String>,
    pub bucket: Option<String>,
    /// HTTP header: `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub key: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    pub upload_id: Option<String>,
}

/// S3 UploadPartOutput.
#[derive(Debug, Clone, Default)]
pub struct UploadPartOutput {
    /// HTTP headers: `x-amz-checksum-*`.
    pub checksums: Checksums,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
}

/// S3 CompleteMultipartUploadOutput.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadOutput {
    pub bucket: Option<String>,
    pub checksums: Checksums,
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    pub key: Option<String>,
    pub location: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// S3 AbortMultipartUploadOutput.
#[derive(Debug, Clone, Default)]
pub struct AbortMultipartUploadOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// S3 ListPartsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListPartsOutput {
    /// HTTP header: `x-amz-abort-date`.
    pub abort_date: Option<DateTime<Utc>>,
    pub bucket: Option<String>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub initiator: Option<Initiator>,
    pub is_truncated: Option<bool>,
    pub key: Option<String>,
    pub max_parts: Option<i32>,
    pub next_part_number_marker: Option<String>,
    pub owner: Option<Owner>,
    pub part_number_marker: Option<String>,
    pub parts: Vec<Part>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub storage_class: Option<StorageClass>,
    pub upload_id: Option<String>,
}

impl PageableResponse for ListPartsOutput {
    type Token = String;

    fn next_token(&self) -> Option<String> {
        if self.is_truncated == Some(true) {
            non_empty(self.next_part_number_marker.as_ref())
        } else {
            None
        }
    }
}

/// S3 ListMultipartUploadsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsOutput {
    pub bucket: Option<String>,
    pub common_prefixes: Vec<CommonPrefix>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub max_uploads: Option<i32>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub upload_id_marker: Option<String>,
    pub uploads: Vec<MultipartUpload>,
}

impl PageableResponse for ListMultipartUploadsOutput {
    /// `(key-marker, upload-id-marker)`.
    type Token = (String, Option<String>);

    fn next_token(&self) -> Option<Self::Token> {
        if self.is_truncated != Some(true) {
            return None;
        }
        let key = non_empty(self.next_key_marker.as_ref())?;
        Some((key, non_empty(self.next_upload_id_marker.as_ref())))
    }
}
