use crate::types::{CORSRule, Tag};

/// S3 GetBucketTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketTaggingOutput {
    pub tag_set: Vec<Tag>,
}

/// S3 PutBucketTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketTaggingOutput {}

/// S3 DeleteBucketTaggingOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketTaggingOutput {}

/// S3 GetBucketPolicyOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketPolicyOutput {
    /// HTTP payload: the JSON policy document.
    pub policy: String,
}

/// S3 PutBucketPolicyOutput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketPolicyOutput {}

/// S3 DeleteBucketPolicyOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketPolicyOutput {}

/// S3 GetBucketCorsOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketCorsOutput {
    pub cors_rules: Vec<CORSRule>,
}

/// S3 PutBucketCorsOutput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketCorsOutput {}

/// S3 DeleteBucketCorsOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketCorsOutput {}
