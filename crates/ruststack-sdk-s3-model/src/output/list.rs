use ruststack_sdk_core::PageableResponse;

use super::non_empty;
use crate::types::{
    CommonPrefix, DeleteMarkerEntry, EncodingType, Object, ObjectVersion, RequestCharged,
};

/// S3 ListObjectsV2Output.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<Object>,
    pub continuation_token: Option<String>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_count: Option<i32>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_continuation_token: Option<String>,
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub start_after: Option<String>,
}

impl PageableResponse for ListObjectsV2Output {
    type Token = String;

    fn next_token(&self) -> Option<String> {
        if self.is_truncated == Some(true) {
            non_empty(self.next_continuation_token.as_ref())
        } else {
            None
        }
    }
}

/// S3 ListObjectVersionsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListObjectVersionsOutput {
    pub common_prefixes: Vec<CommonPrefix>,
    pub delete_markers: Vec<DeleteMarkerEntry>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub prefix: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    pub version_id_marker: Option<String>,
    pub versions: Vec<ObjectVersion>,
}

impl PageableResponse for ListObjectVersionsOutput {
    /// `(key-marker, version-id-marker)`.
    type Token = (String, Option<String>);

    fn next_token(&self) -> Option<Self::Token> {
        if self.is_truncated != Some(true) {
            return None;
        }
        let key = non_empty(self.next_key_marker.as_ref())?;
        Some((key, non_empty(self.next_version_id_marker.as_ref())))
    }
}
