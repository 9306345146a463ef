//! S3 enumerations and value objects.

use chrono::{DateTime, Utc};
use serde::Serialize;

s3_enum! {
    /// Canned ACL applied to a bucket.
    BucketCannedACL {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
    }
}

s3_enum! {
    /// Canned ACL applied to an object.
    ObjectCannedACL {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

s3_enum! {
    /// Region a bucket is created in. `us-east-1` has no constraint value.
    BucketLocationConstraint {
        AfSouth1 => "af-south-1",
        ApEast1 => "ap-east-1",
        ApNortheast1 => "ap-northeast-1",
        ApNortheast2 => "ap-northeast-2",
        ApNortheast3 => "ap-northeast-3",
        ApSouth1 => "ap-south-1",
        ApSouth2 => "ap-south-2",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        ApSoutheast3 => "ap-southeast-3",
        ApSoutheast4 => "ap-southeast-4",
        CaCentral1 => "ca-central-1",
        CaWest1 => "ca-west-1",
        CnNorth1 => "cn-north-1",
        CnNorthwest1 => "cn-northwest-1",
        Eu => "EU",
        EuCentral1 => "eu-central-1",
        EuCentral2 => "eu-central-2",
        EuNorth1 => "eu-north-1",
        EuSouth1 => "eu-south-1",
        EuSouth2 => "eu-south-2",
        EuWest1 => "eu-west-1",
        EuWest2 => "eu-west-2",
        EuWest3 => "eu-west-3",
        IlCentral1 => "il-central-1",
        MeCentral1 => "me-central-1",
        MeSouth1 => "me-south-1",
        SaEast1 => "sa-east-1",
        UsEast2 => "us-east-2",
        UsGovEast1 => "us-gov-east-1",
        UsGovWest1 => "us-gov-west-1",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
    }
}

s3_enum! {
    BucketVersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

s3_enum! {
    MFADelete {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Encoding applied to keys in list responses.
    EncodingType {
        Url => "url",
    }
}

s3_enum! {
    /// One of the five ACL permissions.
    Permission {
        FullControl => "FULL_CONTROL",
        Write => "WRITE",
        WriteAcp => "WRITE_ACP",
        Read => "READ",
        ReadAcp => "READ_ACP",
    }
}

s3_enum! {
    /// Grantee kind (`xsi:type`).
    Type {
        CanonicalUser => "CanonicalUser",
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        Group => "Group",
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::CanonicalUser
    }
}

s3_enum! {
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
        Outposts => "OUTPOSTS",
        GlacierIr => "GLACIER_IR",
        Snow => "SNOW",
        ExpressOnezone => "EXPRESS_ONEZONE",
    }
}

s3_enum! {
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
        AwsKmsDsse => "aws:kms:dsse",
    }
}

s3_enum! {
    MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    RequestPayer {
        Requester => "requester",
    }
}

s3_enum! {
    RequestCharged {
        Requester => "requester",
    }
}

s3_enum! {
    /// Additional checksum algorithm (`x-amz-checksum-*`).
    ChecksumAlgorithm {
        Crc32 => "CRC32",
        Crc32c => "CRC32C",
        Sha1 => "SHA1",
        Sha256 => "SHA256",
    }
}

impl ChecksumAlgorithm {
    /// Header carrying a checksum of this algorithm.
    #[must_use]
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::Crc32 => "x-amz-checksum-crc32",
            Self::Crc32c => "x-amz-checksum-crc32c",
            Self::Sha1 => "x-amz-checksum-sha1",
            Self::Sha256 => "x-amz-checksum-sha256",
        }
    }
}

s3_enum! {
    ChecksumMode {
        Enabled => "ENABLED",
    }
}

s3_enum! {
    ObjectOwnership {
        BucketOwnerPreferred => "BucketOwnerPreferred",
        ObjectWriter => "ObjectWriter",
        BucketOwnerEnforced => "BucketOwnerEnforced",
    }
}

/// Checksums reported for an object or part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Checksums {
    #[serde(rename = "ChecksumCRC32", skip_serializing_if = "Option::is_none")]
    pub crc32: Option<String>,
    #[serde(rename = "ChecksumCRC32C", skip_serializing_if = "Option::is_none")]
    pub crc32c: Option<String>,
    #[serde(rename = "ChecksumSHA1", skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(rename = "ChecksumSHA256", skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl Checksums {
    /// Value for `algorithm`, if reported.
    #[must_use]
    pub fn get(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        match algorithm {
            ChecksumAlgorithm::Crc32 => self.crc32.as_deref(),
            ChecksumAlgorithm::Crc32c => self.crc32c.as_deref(),
            ChecksumAlgorithm::Sha1 => self.sha1.as_deref(),
            ChecksumAlgorithm::Sha256 => self.sha256.as_deref(),
        }
    }

    /// Store the value for `algorithm`.
    pub fn set(&mut self, algorithm: ChecksumAlgorithm, value: String) {
        let slot = match algorithm {
            ChecksumAlgorithm::Crc32 => &mut self.crc32,
            ChecksumAlgorithm::Crc32c => &mut self.crc32c,
            ChecksumAlgorithm::Sha1 => &mut self.sha1,
            ChecksumAlgorithm::Sha256 => &mut self.sha256,
        };
        *slot = Some(value);
    }

    /// Whether no checksum is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crc32.is_none() && self.crc32c.is_none() && self.sha1.is_none() && self.sha256.is_none()
    }
}

/// S3 Owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    pub display_name: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            display_name: None,
        }
    }
}

/// S3 Initiator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Initiator {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    pub display_name: Option<String>,
}

/// S3 Bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub bucket_region: Option<String>,
}

/// An object entry in a `ListObjectsV2` page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Object {
    pub key: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "ETag")]
    pub e_tag: Option<String>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub owner: Option<Owner>,
    pub checksum_algorithm: Vec<ChecksumAlgorithm>,
}

/// An object version in a `ListObjectVersions` page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectVersion {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub is_latest: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "ETag")]
    pub e_tag: Option<String>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub owner: Option<Owner>,
}

/// A delete marker in a `ListObjectVersions` page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMarkerEntry {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub is_latest: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
    pub owner: Option<Owner>,
}

/// S3 CommonPrefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

/// S3 Tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// S3 Tagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tagging {
    pub tag_set: Vec<Tag>,
}

impl Tagging {
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tag_set: tags.into_iter().collect(),
        }
    }
}

/// S3 Grantee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Grantee {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
    pub r#type: Type,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

impl Grantee {
    /// Grantee identified by canonical user id.
    #[must_use]
    pub fn canonical_user(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            r#type: Type::CanonicalUser,
            ..Self::default()
        }
    }

    /// Grantee identified by e-mail address.
    #[must_use]
    pub fn email(address: impl Into<String>) -> Self {
        Self {
            email_address: Some(address.into()),
            r#type: Type::AmazonCustomerByEmail,
            ..Self::default()
        }
    }

    /// Predefined group, e.g. `http://acs.amazonaws.com/groups/global/AllUsers`.
    #[must_use]
    pub fn group(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            r#type: Type::Group,
            ..Self::default()
        }
    }

    /// The member required by the grantee type, if set.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self.r#type {
            Type::CanonicalUser => self.id.as_deref(),
            Type::AmazonCustomerByEmail => self.email_address.as_deref(),
            Type::Group => self.uri.as_deref(),
        }
    }
}

/// S3 Grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Grant {
    pub grantee: Option<Grantee>,
    pub permission: Option<Permission>,
}

impl Grant {
    #[must_use]
    pub fn new(grantee: Grantee, permission: Permission) -> Self {
        Self {
            grantee: Some(grantee),
            permission: Some(permission),
        }
    }
}

/// S3 AccessControlPolicy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessControlPolicy {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
}

/// S3 CreateBucketConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    pub location_constraint: Option<BucketLocationConstraint>,
}

/// S3 VersioningConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersioningConfiguration {
    pub status: Option<BucketVersioningStatus>,
    pub mfa_delete: Option<MFADelete>,
}

/// S3 CORSRule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CORSRule {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_seconds: Option<i32>,
}

/// S3 CORSConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CORSConfiguration {
    pub cors_rules: Vec<CORSRule>,
}

/// S3 ObjectIdentifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdentifier {
    pub key: String,
    pub version_id: Option<String>,
}

impl ObjectIdentifier {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: None,
        }
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 Delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delete {
    pub objects: Vec<ObjectIdentifier>,
    pub quiet: Option<bool>,
}

impl Delete {
    /// Delete the latest version of each key.
    #[must_use]
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            objects: keys.into_iter().map(ObjectIdentifier::new).collect(),
            quiet: None,
        }
    }
}

/// S3 DeletedObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletedObject {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
}

/// S3 Error: a per-key failure in a `DeleteObjects` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Error {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// S3 CopyObjectResult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub checksums: Checksums,
}

/// S3 CompletedPart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedPart {
    pub part_number: Option<i32>,
    pub e_tag: Option<String>,
    pub checksums: Checksums,
}

impl CompletedPart {
    #[must_use]
    pub fn new(part_number: i32, e_tag: impl Into<String>) -> Self {
        Self {
            part_number: Some(part_number),
            e_tag: Some(e_tag.into()),
            checksums: Checksums::default(),
        }
    }
}

/// S3 CompletedMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedMultipartUpload {
    pub parts: Vec<CompletedPart>,
}

/// S3 Part (`ListParts` entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Part {
    pub part_number: Option<i32>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "ETag")]
    pub e_tag: Option<String>,
    pub size: Option<i64>,
    #[serde(flatten)]
    pub checksums: Checksums,
}

/// S3 MultipartUpload (`ListMultipartUploads` entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultipartUpload {
    pub upload_id: Option<String>,
    pub key: Option<String>,
    pub initiated: Option<DateTime<Utc>>,
    pub storage_class: Option<StorageClass>,
    pub owner: Option<Owner>,
    pub initiator: Option<Initiator>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ruststack_sdk_core::SdkError;

    use super::*;

    #[test]
    fn test_should_parse_known_enum_values() {
        assert_eq!(Permission::from_str("READ_ACP").unwrap(), Permission::ReadAcp);
        assert_eq!(
            ServerSideEncryption::from_str("aws:kms").unwrap(),
            ServerSideEncryption::AwsKms
        );
        assert_eq!(StorageClass::GlacierIr.as_str(), "GLACIER_IR");
        assert_eq!(Permission::VALUES.len(), 5);
    }

    #[test]
    fn test_should_reject_unknown_enum_value() {
        let err = Permission::from_str("EVERYTHING").unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidEnumValue { type_name: "Permission", ref value } if value == "EVERYTHING"
        ));
        assert!(StorageClass::from_wire("FUTURE_CLASS").is_none());
    }

    #[test]
    fn test_should_build_grantees() {
        let group = Grantee::group("http://acs.amazonaws.com/groups/global/AllUsers");
        assert_eq!(group.r#type, Type::Group);
        assert_eq!(
            group.identifier(),
            Some("http://acs.amazonaws.com/groups/global/AllUsers")
        );
        assert_eq!(Grantee::email("a@example.com").identifier(), Some("a@example.com"));
        assert_eq!(Grantee::default().identifier(), None);
    }

    #[test]
    fn test_should_track_checksums_by_algorithm() {
        let mut checksums = Checksums::default();
        assert!(checksums.is_empty());
        checksums.set(ChecksumAlgorithm::Crc32c, "yZRlqg==".to_owned());
        assert_eq!(checksums.get(ChecksumAlgorithm::Crc32c), Some("yZRlqg=="));
        assert_eq!(checksums.get(ChecksumAlgorithm::Sha1), None);
    }

    #[test]
    fn test_should_serialize_value_objects_in_aws_casing() {
        let object = Object {
            key: Some("photos/cat.jpg".to_owned()),
            e_tag: Some("\"abc\"".to_owned()),
            size: Some(42),
            storage_class: Some(StorageClass::Standard),
            ..Object::default()
        };
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["Key"], "photos/cat.jpg");
        assert_eq!(json["ETag"], "\"abc\"");
        assert_eq!(json["StorageClass"], "STANDARD");
    }
}
