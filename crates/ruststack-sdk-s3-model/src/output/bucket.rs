use ruststack_sdk_core::PageableResponse;

use super::non_empty;
use crate::types::{
    Bucket, BucketLocationConstraint, BucketVersioningStatus, Grant, MFADelete, Owner,
};

/// S3 CreateBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// HTTP header: `Location`.
    pub location: Option<String>,
}

/// S3 DeleteBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketOutput {}

/// S3 HeadBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketOutput {
    /// HTTP header: `x-amz-access-point-alias`.
    pub access_point_alias: Option<bool>,
    /// HTTP header: `x-amz-bucket-region`.
    pub bucket_region: Option<String>,
}

/// S3 ListBucketsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    pub buckets: Vec<Bucket>,
    pub continuation_token: Option<String>,
    pub owner: Option<Owner>,
    pub prefix: Option<String>,
}

impl PageableResponse for ListBucketsOutput {
    type Token = String;

    fn next_token(&self) -> Option<String> {
        non_empty(self.continuation_token.as_ref())
    }
}

/// S3 GetBucketLocationOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketLocationOutput {
    /// `None` for buckets in `us-east-1`.
    pub location_constraint: Option<BucketLocationConstraint>,
}

impl GetBucketLocationOutput {
    /// Region the bucket lives in.
    #[must_use]
    pub fn region(&self) -> &'static str {
        match self.location_constraint {
            None => "us-east-1",
            Some(BucketLocationConstraint::Eu) => "eu-west-1",
            Some(constraint) => constraint.as_str(),
        }
    }
}

/// S3 GetBucketAclOutput.
#[derive(Debug, Clone, Default)]
pub struct GetBucketAclOutput {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
}

/// S3 PutBucketAclOutput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketAclOutput {}

/// S3 GetBucketVersioningOutput.
///
/// Both members are `None` for a bucket that never had versioning enabled.
#[derive(Debug, Clone, Default)]
pub struct GetBucketVersioningOutput {
    pub mfa_delete: Option<MFADelete>,
    pub status: Option<BucketVersioningStatus>,
}

/// S3 PutBucketVersioningOutput.
#[derive(Debug, Clone, Default)]
pub struct PutBucketVersioningOutput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_empty_location_to_us_east_1() {
        assert_eq!(GetBucketLocationOutput::default().region(), "us-east-1");
        let eu = GetBucketLocationOutput {
            location_constraint: Some(BucketLocationConstraint::Eu),
        };
        assert_eq!(eu.region(), "eu-west-1");
        let tokyo = GetBucketLocationOutput {
            location_constraint: Some(BucketLocationConstraint::ApNortheast1),
        };
        assert_eq!(tokyo.region(), "ap-northeast-1");
    }

    #[test]
    fn test_should_ignore_empty_bucket_continuation_token() {
        let mut output = ListBucketsOutput {
            continuation_token: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(output.next_token(), None);
        output.continuation_token = Some("abc".to_owned());
        assert_eq!(output.next_token().as_deref(), Some("abc"));
    }
}
