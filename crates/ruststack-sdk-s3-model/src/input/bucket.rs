use ruststack_sdk_core::SdkError;

use super::{require, validate_policy};
use crate::S3Operation;
use crate::types::{
    AccessControlPolicy, BucketCannedACL, CreateBucketConfiguration, MFADelete, ObjectOwnership,
    VersioningConfiguration,
};

/// S3 CreateBucketInput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInput {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<BucketCannedACL>,
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP payload. Omitted for `us-east-1`.
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write`.
    pub grant_write: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// HTTP header: `x-amz-bucket-object-lock-enabled`.
    pub object_lock_enabled_for_bucket: Option<bool>,
    /// HTTP header: `x-amz-object-ownership`.
    pub object_ownership: Option<ObjectOwnership>,
}

impl CreateBucketInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::CreateBucket, "Bucket", &self.bucket)
    }
}

/// S3 DeleteBucketInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl DeleteBucketInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::DeleteBucket, "Bucket", &self.bucket)
    }
}

/// S3 HeadBucketInput.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl HeadBucketInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::HeadBucket, "Bucket", &self.bucket)
    }
}

/// S3 ListBucketsInput.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsInput {
    /// HTTP query: `bucket-region`.
    pub bucket_region: Option<String>,
    /// HTTP query: `continuation-token`.
    pub continuation_token: Option<String>,
    /// HTTP query: `max-buckets`.
    pub max_buckets: Option<i32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
}

impl ListBucketsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        match self.max_buckets {
            Some(n) if !(1..=10_000).contains(&n) => Err(SdkError::validation(
                S3Operation::ListBuckets.as_str(),
                format!("max buckets must be between 1 and 10000, got {n}"),
            )),
            _ => Ok(()),
        }
    }
}

/// S3 GetBucketLocationInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketLocationInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketLocationInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketLocation, "Bucket", &self.bucket)
    }
}

/// S3 GetBucketAclInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketAclInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketAclInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketAcl, "Bucket", &self.bucket)
    }
}

/// S3 PutBucketAclInput.
///
/// Either a canned `acl`, explicit grant headers or an
/// `access_control_policy` body may be given.
#[derive(Debug, Clone, Default)]
pub struct PutBucketAclInput {
    /// HTTP payload.
    pub access_control_policy: Option<AccessControlPolicy>,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<BucketCannedACL>,
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write`.
    pub grant_write: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
}

impl PutBucketAclInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutBucketAcl;
        require(op, "Bucket", &self.bucket)?;
        if let Some(policy) = &self.access_control_policy {
            validate_policy(op, policy)?;
        }
        Ok(())
    }
}

/// S3 GetBucketVersioningInput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketVersioningInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

impl GetBucketVersioningInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        require(S3Operation::GetBucketVersioning, "Bucket", &self.bucket)
    }
}

/// S3 PutBucketVersioningInput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketVersioningInput {
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
    /// HTTP payload.
    pub versioning_configuration: VersioningConfiguration,
}

impl PutBucketVersioningInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = S3Operation::PutBucketVersioning;
        require(op, "Bucket", &self.bucket)?;
        if self.versioning_configuration.status.is_none() {
            return Err(SdkError::missing_field(
                op.as_str(),
                "VersioningConfiguration.Status",
            ));
        }
        if self.versioning_configuration.mfa_delete == Some(MFADelete::Enabled) && self.mfa.is_none()
        {
            return Err(SdkError::missing_field(op.as_str(), "MFA"));
        }
        Ok(())
    }
}
