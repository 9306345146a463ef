//! S3 operation inputs.
//!
//! Every input exposes `validate()`, which checks required members and
//! member constraints before anything is sent.

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;
use ruststack_sdk_core::SdkError;

use crate::S3Operation;
use crate::types::{AccessControlPolicy, Grantee, Tag};

/// Maximum number of tags on an object.
pub const MAX_OBJECT_TAGS: usize = 10;
/// Maximum number of tags on a bucket.
pub const MAX_BUCKET_TAGS: usize = 50;
/// Maximum number of keys in one `DeleteObjects` request.
pub const MAX_DELETE_OBJECTS: usize = 1000;
/// Part numbers accepted by `UploadPart`.
pub const PART_NUMBER_RANGE: std::ops::RangeInclusive<i32> = 1..=10_000;

pub(crate) fn require(op: S3Operation, field: &str, value: &str) -> Result<(), SdkError> {
    if value.is_empty() {
        return Err(SdkError::missing_field(op.as_str(), field));
    }
    Ok(())
}

pub(crate) fn invalid(op: S3Operation, message: impl Into<String>) -> SdkError {
    SdkError::validation(op.as_str(), message)
}

pub(crate) fn validate_max_keys(op: S3Operation, max: Option<i32>) -> Result<(), SdkError> {
    match max {
        Some(n) if n < 0 => Err(invalid(op, format!("max keys must not be negative, got {n}"))),
        _ => Ok(()),
    }
}

pub(crate) fn validate_tags(op: S3Operation, tags: &[Tag], limit: usize) -> Result<(), SdkError> {
    if tags.len() > limit {
        return Err(invalid(
            op,
            format!("at most {limit} tags are allowed, got {}", tags.len()),
        ));
    }
    for tag in tags {
        if tag.key.is_empty() {
            return Err(SdkError::missing_field(op.as_str(), "Tag.Key"));
        }
        if tag.key.chars().count() > 128 {
            return Err(invalid(op, format!("tag key `{}` exceeds 128 characters", tag.key)));
        }
        if tag.value.chars().count() > 256 {
            return Err(invalid(
                op,
                format!("value of tag `{}` exceeds 256 characters", tag.key),
            ));
        }
    }
    let mut keys: Vec<&str> = tags.iter().map(|t| t.key.as_str()).collect();
    keys.sort_unstable();
    if let Some(pair) = keys.windows(2).find(|w| w[0] == w[1]) {
        return Err(invalid(op, format!("duplicate tag key `{}`", pair[0])));
    }
    Ok(())
}

pub(crate) fn validate_grantee(op: S3Operation, grantee: &Grantee) -> Result<(), SdkError> {
    if grantee.identifier().is_none_or(str::is_empty) {
        let field = match grantee.r#type {
            crate::types::Type::CanonicalUser => "Grantee.ID",
            crate::types::Type::AmazonCustomerByEmail => "Grantee.EmailAddress",
            crate::types::Type::Group => "Grantee.URI",
        };
        return Err(SdkError::missing_field(op.as_str(), field));
    }
    Ok(())
}

pub(crate) fn validate_policy(
    op: S3Operation,
    policy: &AccessControlPolicy,
) -> Result<(), SdkError> {
    for grant in &policy.grants {
        let grantee = grant
            .grantee
            .as_ref()
            .ok_or_else(|| SdkError::missing_field(op.as_str(), "Grant.Grantee"))?;
        validate_grantee(op, grantee)?;
        if grant.permission.is_none() {
            return Err(SdkError::missing_field(op.as_str(), "Grant.Permission"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_reject_empty_required_value() {
        let err = require(S3Operation::GetObject, "Key", "").unwrap_err();
        assert_eq!(err.to_string(), "GetObject: missing required field `Key`");
        assert!(require(S3Operation::GetObject, "Key", "k").is_ok());
    }

    #[test]
    fn test_should_enforce_tag_limits() {
        let op = S3Operation::PutObjectTagging;
        let eleven: Vec<Tag> = (0..11).map(|i| Tag::new(format!("k{i}"), "v")).collect();
        assert!(validate_tags(op, &eleven, MAX_OBJECT_TAGS).is_err());
        assert!(validate_tags(op, &eleven, MAX_BUCKET_TAGS).is_ok());
        assert!(validate_tags(op, &[Tag::new("", "v")], MAX_OBJECT_TAGS).is_err());
        assert!(validate_tags(op, &[Tag::new("k".repeat(129), "v")], MAX_OBJECT_TAGS).is_err());
        assert!(
            validate_tags(op, &[Tag::new("a", "1"), Tag::new("a", "2")], MAX_OBJECT_TAGS).is_err()
        );
    }

    #[test]
    fn test_should_require_grantee_identifier_matching_type() {
        let op = S3Operation::PutObjectAcl;
        let mut grantee = Grantee::canonical_user("abc");
        assert!(validate_grantee(op, &grantee).is_ok());
        grantee.r#type = crate::types::Type::Group;
        let err = validate_grantee(op, &grantee).unwrap_err();
        assert!(err.to_string().contains("Grantee.URI"));
    }
}
