use ruststack_sdk_core::SdkError;

use super::{invalid, require, validate_max_keys};
use crate::S3Operation;
use crate::types::{EncodingType, RequestPayer};

/// S3 ListObjectsV2Input.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Input {
    pub bucket: String,
    /// HTTP query: `continuation-token`.
    pub continuation_token: Option<String>,
    /// HTTP query: `delimiter`.
    pub delimiter: Option<String>,
    /// HTTP query: `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP query: `fetch-owner`.
    pub fetch_owner: Option<bool>,
    /// HTTP query: `max-keys`.
    pub max_keys: Option<i32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `start-after`.
    pub start_after: Option<String>,
}

impl ListObjectsV2Input {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::ListObjectsV2, "Bucket", &self.bucket)?;
        validate_max_keys(S3Operation::ListObjectsV2, self.max_keys)
    }
}

/// S3 ListObjectVersionsInput.
#[derive(Debug, Clone, Default)]
pub struct ListObjectVersionsInput {
    pub bucket: String,
    /// HTTP query: `delimiter`.
    pub delimiter: Option<String>,
    /// HTTP query: `encoding-type`.
    pub encoding_type: Option<EncodingType>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP query: `key-marker`.
    pub key_marker: Option<String>,
    /// HTTP query: `max-keys`.
    pub max_keys: Option<i32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `version-id-marker`.
    pub version_id_marker: Option<String>,
}

impl ListObjectVersionsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::ListObjectVersions;
        require(op, "Bucket", &self.bucket)?;
        validate_max_keys(op, self.max_keys)?;
        if self.version_id_marker.is_some() && self.key_marker.is_none() {
            return Err(invalid(op, "a version id marker requires a key marker"));
        }
        Ok(())
    }
}
