use ruststack_sdk_core::SdkError;

use super::{MAX_BUCKET_TAGS, invalid, require, validate_tags};
use crate::S3Operation;
use crate::types::{CORSConfiguration, ChecksumAlgorithm, Tagging};

/// S3 GetBucketTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketTagging, "Bucket", &self.bucket)
    }
}

/// S3 PutBucketTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP payload.
    pub tagging: Tagging,
}

impl PutBucketTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutBucketTagging;
        require(op, "Bucket", &self.bucket)?;
        validate_tags(op, &self.tagging.tag_set, MAX_BUCKET_TAGS)
    }
}

/// S3 DeleteBucketTaggingInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketTaggingInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketTaggingInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteBucketTagging, "Bucket", &self.bucket)
    }
}

/// S3 GetBucketPolicyInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketPolicyInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketPolicyInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketPolicy, "Bucket", &self.bucket)
    }
}

/// S3 PutBucketPolicyInput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketPolicyInput {
    pub bucket: String,
    /// HTTP header: `x-amz-confirm-remove-self-bucket-access`.
    pub confirm_remove_self_bucket_access: Option<bool>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP payload: the JSON policy document, sent verbatim.
    pub policy: String,
}

impl PutBucketPolicyInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutBucketPolicy;
        require(op, "Bucket", &self.bucket)?;
        require(op, "Policy", self.policy.trim())
    }
}

/// S3 DeleteBucketPolicyInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketPolicyInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketPolicyInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteBucketPolicy, "Bucket", &self.bucket)
    }
}

/// S3 GetBucketCorsInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketCorsInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketCorsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketCors, "Bucket", &self.bucket)
    }
}

/// S3 PutBucketCorsInput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketCorsInput {
    pub bucket: String,
    /// HTTP payload.
    pub cors_configuration: CORSConfiguration,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl PutBucketCorsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutBucketCors;
        require(op, "Bucket", &self.bucket)?;
        let rules = &self.cors_configuration.cors_rules;
        if rules.is_empty() {
            return Err(SdkError::missing_field(op.as_str(), "CORSRules"));
        }
        if rules.len() > 100 {
            return Err(invalid(op, "at most 100 CORS rules are allowed"));
        }
        for rule in rules {
            if rule.allowed_methods.is_empty() {
                return Err(SdkError::missing_field(op.as_str(), "CORSRule.AllowedMethods"));
            }
            if rule.allowed_origins.is_empty() {
                return Err(SdkError::missing_field(op.as_str(), "CORSRule.AllowedOrigins"));
            }
            if let Some(method) = rule
                .allowed_methods
                .iter()
                .find(|m| !matches!(m.as_str(), "GET" | "PUT" | "POST" | "DELETE" | "HEAD"))
            {
                return Err(invalid(op, format!("unsupported CORS method `{method}`")));
            }
        }
        Ok(())
    }
}

/// S3 DeleteBucketCorsInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketCorsInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketCorsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteBucketCors, "Bucket", &self.bucket)
    }
}
