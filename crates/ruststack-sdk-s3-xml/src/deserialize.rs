//! S3 XML deserialization: parsing response bodies into model types.
//!
//! Unknown elements are skipped. Enumeration values the model does not know
//! are logged and dropped rather than failing the whole response.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use ruststack_sdk_s3_model::output::{
    CompleteMultipartUploadOutput, CreateMultipartUploadOutput, DeleteObjectsOutput,
    GetBucketLocationOutput, GetBucketVersioningOutput, ListBucketsOutput,
    ListMultipartUploadsOutput, ListObjectVersionsOutput, ListObjectsV2Output, ListPartsOutput,
};
use ruststack_sdk_s3_model::types::{
    AccessControlPolicy, Bucket, BucketLocationConstraint, BucketVersioningStatus, CORSConfiguration,
    CORSRule, ChecksumAlgorithm, Checksums, CommonPrefix, CopyObjectResult, DeleteMarkerEntry,
    DeletedObject, EncodingType, Error as KeyError, Grant, Grantee, Initiator, MFADelete,
    MultipartUpload, Object, ObjectVersion, Owner, Part, Permission, StorageClass, Tag, Tagging,
    Type as GranteeType,
};
use tracing::warn;

use crate::error::XmlError;

/// Trait for deserializing S3 types from XML.
///
/// The opening tag has already been consumed by the caller; implementations
/// read child elements up to and including the matching end tag.
pub trait S3Deserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize an S3 XML document into a typed value.
///
/// A self-closing root element (`<LocationConstraint/>`) yields the default value.
pub fn from_xml<T: S3Deserialize + Default>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => return T::deserialize_xml(&mut reader),
            Event::Empty(_) => return Ok(T::default()),
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Reading helpers
// ---------------------------------------------------------------------------

/// Visit each child element of the current element.
///
/// `handle` must consume the child through its end tag (read its text,
/// deserialize it, or skip it). Self-closing children are ignored.
pub(crate) fn for_each_child<'a>(
    reader: &mut Reader<&'a [u8]>,
    context: &str,
    mut handle: impl FnMut(&mut Reader<&'a [u8]>, &str, &BytesStart<'_>) -> Result<(), XmlError>,
) -> Result<(), XmlError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                let tag = std::str::from_utf8(name.as_ref())
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                handle(reader, tag, &e)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {context}"
                )));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
pub(crate) fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                text.push_str(&String::from_utf8_lossy(&e));
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
pub(crate) fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

fn read_bool(reader: &mut Reader<&[u8]>) -> Result<bool, XmlError> {
    let s = read_text_content(reader)?;
    match s.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::ParseError(format!("invalid boolean: {s}"))),
    }
}

fn read_i32(reader: &mut Reader<&[u8]>) -> Result<i32, XmlError> {
    let s = read_text_content(reader)?;
    s.parse::<i32>()
        .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
}

fn read_i64(reader: &mut Reader<&[u8]>) -> Result<i64, XmlError> {
    let s = read_text_content(reader)?;
    s.parse::<i64>()
        .map_err(|e| XmlError::ParseError(format!("invalid i64 '{s}': {e}")))
}

fn read_timestamp(
    reader: &mut Reader<&[u8]>,
) -> Result<chrono::DateTime<chrono::Utc>, XmlError> {
    let s = read_text_content(reader)?;
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{s}': {e}")))
}

fn read_enum<E>(
    reader: &mut Reader<&[u8]>,
    type_name: &'static str,
    parse: fn(&str) -> Option<E>,
) -> Result<Option<E>, XmlError> {
    let text = read_text_content(reader)?;
    let value = parse(&text);
    if value.is_none() && !text.is_empty() {
        warn!(type_name, value = %text, "ignoring unknown enum value in response");
    }
    Ok(value)
}

fn checksum_element(tag: &str) -> Option<ChecksumAlgorithm> {
    match tag {
        "ChecksumCRC32" => Some(ChecksumAlgorithm::Crc32),
        "ChecksumCRC32C" => Some(ChecksumAlgorithm::Crc32c),
        "ChecksumSHA1" => Some(ChecksumAlgorithm::Sha1),
        "ChecksumSHA256" => Some(ChecksumAlgorithm::Sha256),
        _ => None,
    }
}

/// Read a `Checksum*` child into `checksums`, or skip an unknown element.
fn read_checksum_or_skip(
    reader: &mut Reader<&[u8]>,
    tag: &str,
    checksums: &mut Checksums,
) -> Result<(), XmlError> {
    if let Some(algorithm) = checksum_element(tag) {
        checksums.set(algorithm, read_text_content(reader)?);
        Ok(())
    } else {
        skip_element(reader)
    }
}

fn grantee_type(start: &BytesStart<'_>) -> Result<GranteeType, XmlError> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"type" {
            let value = String::from_utf8_lossy(&attr.value);
            return GranteeType::from_wire(&value)
                .ok_or_else(|| XmlError::ParseError(format!("unknown grantee type '{value}'")));
        }
    }
    Ok(GranteeType::default())
}

fn read_common_prefix(reader: &mut Reader<&[u8]>) -> Result<CommonPrefix, XmlError> {
    let mut prefix = CommonPrefix::default();
    for_each_child(reader, "CommonPrefixes", |reader, tag, _| {
        match tag {
            "Prefix" => prefix.prefix = Some(read_text_content(reader)?),
            _ => skip_element(reader)?,
        }
        Ok(())
    })?;
    Ok(prefix)
}

fn read_encoding_type(reader: &mut Reader<&[u8]>) -> Result<Option<EncodingType>, XmlError> {
    read_enum(reader, "EncodingType", EncodingType::from_wire)
}

// ---------------------------------------------------------------------------
// Shared structures
// ---------------------------------------------------------------------------

impl S3Deserialize for Owner {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut owner = Owner::default();
        for_each_child(reader, "Owner", |reader, tag, _| {
            match tag {
                "ID" => owner.id = Some(read_text_content(reader)?),
                "DisplayName" => owner.display_name = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(owner)
    }
}

impl S3Deserialize for Initiator {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut initiator = Initiator::default();
        for_each_child(reader, "Initiator", |reader, tag, _| {
            match tag {
                "ID" => initiator.id = Some(read_text_content(reader)?),
                "DisplayName" => initiator.display_name = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(initiator)
    }
}

impl S3Deserialize for Bucket {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut bucket = Bucket::default();
        for_each_child(reader, "Bucket", |reader, tag, _| {
            match tag {
                "Name" => bucket.name = Some(read_text_content(reader)?),
                "CreationDate" => bucket.creation_date = Some(read_timestamp(reader)?),
                "BucketRegion" => bucket.bucket_region = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(bucket)
    }
}

impl S3Deserialize for Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut t = Tag::default();
        for_each_child(reader, "Tag", |reader, tag, _| {
            match tag {
                "Key" => t.key = read_text_content(reader)?,
                "Value" => t.value = read_text_content(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(t)
    }
}

impl S3Deserialize for Tagging {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut tagging = Tagging::default();
        for_each_child(reader, "Tagging", |reader, tag, _| {
            match tag {
                "TagSet" => {
                    for_each_child(reader, "TagSet", |reader, tag, _| {
                        match tag {
                            "Tag" => tagging.tag_set.push(Tag::deserialize_xml(reader)?),
                            _ => skip_element(reader)?,
                        }
                        Ok(())
                    })?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(tagging)
    }
}

fn read_grantee(reader: &mut Reader<&[u8]>, r#type: GranteeType) -> Result<Grantee, XmlError> {
    let mut grantee = Grantee {
        r#type,
        ..Grantee::default()
    };
    for_each_child(reader, "Grantee", |reader, tag, _| {
        match tag {
            "DisplayName" => grantee.display_name = Some(read_text_content(reader)?),
            "EmailAddress" => grantee.email_address = Some(read_text_content(reader)?),
            "ID" => grantee.id = Some(read_text_content(reader)?),
            "URI" => grantee.uri = Some(read_text_content(reader)?),
            _ => skip_element(reader)?,
        }
        Ok(())
    })?;
    Ok(grantee)
}

impl S3Deserialize for Grant {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut grant = Grant::default();
        for_each_child(reader, "Grant", |reader, tag, start| {
            match tag {
                "Grantee" => {
                    let r#type = grantee_type(start)?;
                    grant.grantee = Some(read_grantee(reader, r#type)?);
                }
                "Permission" => {
                    grant.permission = read_enum(reader, "Permission", Permission::from_wire)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(grant)
    }
}

impl S3Deserialize for AccessControlPolicy {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut policy = AccessControlPolicy::default();
        for_each_child(reader, "AccessControlPolicy", |reader, tag, _| {
            match tag {
                "Owner" => policy.owner = Some(Owner::deserialize_xml(reader)?),
                "AccessControlList" => {
                    for_each_child(reader, "AccessControlList", |reader, tag, _| {
                        match tag {
                            "Grant" => policy.grants.push(Grant::deserialize_xml(reader)?),
                            _ => skip_element(reader)?,
                        }
                        Ok(())
                    })?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(policy)
    }
}

impl S3Deserialize for CORSRule {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut rule = CORSRule::default();
        for_each_child(reader, "CORSRule", |reader, tag, _| {
            match tag {
                "ID" => rule.id = Some(read_text_content(reader)?),
                "AllowedHeader" => rule.allowed_headers.push(read_text_content(reader)?),
                "AllowedMethod" => rule.allowed_methods.push(read_text_content(reader)?),
                "AllowedOrigin" => rule.allowed_origins.push(read_text_content(reader)?),
                "ExposeHeader" => rule.expose_headers.push(read_text_content(reader)?),
                "MaxAgeSeconds" => rule.max_age_seconds = Some(read_i32(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(rule)
    }
}

impl S3Deserialize for CORSConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut config = CORSConfiguration::default();
        for_each_child(reader, "CORSConfiguration", |reader, tag, _| {
            match tag {
                "CORSRule" => config.cors_rules.push(CORSRule::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(config)
    }
}

impl S3Deserialize for Object {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut object = Object::default();
        for_each_child(reader, "Contents", |reader, tag, _| {
            match tag {
                "Key" => object.key = Some(read_text_content(reader)?),
                "LastModified" => object.last_modified = Some(read_timestamp(reader)?),
                "ETag" => object.e_tag = Some(read_text_content(reader)?),
                "Size" => object.size = Some(read_i64(reader)?),
                "StorageClass" => {
                    object.storage_class =
                        read_enum(reader, "StorageClass", StorageClass::from_wire)?;
                }
                "Owner" => object.owner = Some(Owner::deserialize_xml(reader)?),
                "ChecksumAlgorithm" => {
                    if let Some(algorithm) =
                        read_enum(reader, "ChecksumAlgorithm", ChecksumAlgorithm::from_wire)?
                    {
                        object.checksum_algorithm.push(algorithm);
                    }
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(object)
    }
}

impl S3Deserialize for ObjectVersion {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut version = ObjectVersion::default();
        for_each_child(reader, "Version", |reader, tag, _| {
            match tag {
                "Key" => version.key = Some(read_text_content(reader)?),
                "VersionId" => version.version_id = Some(read_text_content(reader)?),
                "IsLatest" => version.is_latest = Some(read_bool(reader)?),
                "LastModified" => version.last_modified = Some(read_timestamp(reader)?),
                "ETag" => version.e_tag = Some(read_text_content(reader)?),
                "Size" => version.size = Some(read_i64(reader)?),
                "StorageClass" => {
                    version.storage_class =
                        read_enum(reader, "StorageClass", StorageClass::from_wire)?;
                }
                "Owner" => version.owner = Some(Owner::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(version)
    }
}

impl S3Deserialize for DeleteMarkerEntry {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut marker = DeleteMarkerEntry::default();
        for_each_child(reader, "DeleteMarker", |reader, tag, _| {
            match tag {
                "Key" => marker.key = Some(read_text_content(reader)?),
                "VersionId" => marker.version_id = Some(read_text_content(reader)?),
                "IsLatest" => marker.is_latest = Some(read_bool(reader)?),
                "LastModified" => marker.last_modified = Some(read_timestamp(reader)?),
                "Owner" => marker.owner = Some(Owner::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(marker)
    }
}

impl S3Deserialize for DeletedObject {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut deleted = DeletedObject::default();
        for_each_child(reader, "Deleted", |reader, tag, _| {
            match tag {
                "Key" => deleted.key = Some(read_text_content(reader)?),
                "VersionId" => deleted.version_id = Some(read_text_content(reader)?),
                "DeleteMarker" => deleted.delete_marker = Some(read_bool(reader)?),
                "DeleteMarkerVersionId" => {
                    deleted.delete_marker_version_id = Some(read_text_content(reader)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(deleted)
    }
}

impl S3Deserialize for KeyError {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut error = KeyError::default();
        for_each_child(reader, "Error", |reader, tag, _| {
            match tag {
                "Key" => error.key = Some(read_text_content(reader)?),
                "VersionId" => error.version_id = Some(read_text_content(reader)?),
                "Code" => error.code = Some(read_text_content(reader)?),
                "Message" => error.message = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(error)
    }
}

impl S3Deserialize for Part {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut part = Part::default();
        for_each_child(reader, "Part", |reader, tag, _| {
            match tag {
                "PartNumber" => part.part_number = Some(read_i32(reader)?),
                "LastModified" => part.last_modified = Some(read_timestamp(reader)?),
                "ETag" => part.e_tag = Some(read_text_content(reader)?),
                "Size" => part.size = Some(read_i64(reader)?),
                _ => read_checksum_or_skip(reader, tag, &mut part.checksums)?,
            }
            Ok(())
        })?;
        Ok(part)
    }
}

impl S3Deserialize for MultipartUpload {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut upload = MultipartUpload::default();
        for_each_child(reader, "Upload", |reader, tag, _| {
            match tag {
                "UploadId" => upload.upload_id = Some(read_text_content(reader)?),
                "Key" => upload.key = Some(read_text_content(reader)?),
                "Initiated" => upload.initiated = Some(read_timestamp(reader)?),
                "StorageClass" => {
                    upload.storage_class =
                        read_enum(reader, "StorageClass", StorageClass::from_wire)?;
                }
                "Owner" => upload.owner = Some(Owner::deserialize_xml(reader)?),
                "Initiator" => upload.initiator = Some(Initiator::deserialize_xml(reader)?),
                "ChecksumAlgorithm" => {
                    upload.checksum_algorithm =
                        read_enum(reader, "ChecksumAlgorithm", ChecksumAlgorithm::from_wire)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(upload)
    }
}

impl S3Deserialize for CopyObjectResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = CopyObjectResult::default();
        for_each_child(reader, "CopyObjectResult", |reader, tag, _| {
            match tag {
                "ETag" => result.e_tag = Some(read_text_content(reader)?),
                "LastModified" => result.last_modified = Some(read_timestamp(reader)?),
                _ => read_checksum_or_skip(reader, tag, &mut result.checksums)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Operation outputs
// ---------------------------------------------------------------------------

impl S3Deserialize for ListBucketsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = ListBucketsOutput::default();
        for_each_child(reader, "ListAllMyBucketsResult", |reader, tag, _| {
            match tag {
                "Owner" => output.owner = Some(Owner::deserialize_xml(reader)?),
                "Buckets" => {
                    for_each_child(reader, "Buckets", |reader, tag, _| {
                        match tag {
                            "Bucket" => output.buckets.push(Bucket::deserialize_xml(reader)?),
                            _ => skip_element(reader)?,
                        }
                        Ok(())
                    })?;
                }
                "ContinuationToken" => {
                    output.continuation_token = Some(read_text_content(reader)?);
                }
                "Prefix" => output.prefix = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for GetBucketLocationOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let location_constraint = read_enum(
            reader,
            "BucketLocationConstraint",
            BucketLocationConstraint::from_wire,
        )?;
        Ok(GetBucketLocationOutput {
            location_constraint,
        })
    }
}

impl S3Deserialize for GetBucketVersioningOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = GetBucketVersioningOutput::default();
        for_each_child(reader, "VersioningConfiguration", |reader, tag, _| {
            match tag {
                "Status" => {
                    output.status =
                        read_enum(reader, "BucketVersioningStatus", BucketVersioningStatus::from_wire)?;
                }
                "MfaDelete" => {
                    output.mfa_delete = read_enum(reader, "MFADelete", MFADelete::from_wire)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for DeleteObjectsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = DeleteObjectsOutput::default();
        for_each_child(reader, "DeleteResult", |reader, tag, _| {
            match tag {
                "Deleted" => output.deleted.push(DeletedObject::deserialize_xml(reader)?),
                "Error" => output.errors.push(KeyError::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for ListObjectsV2Output {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = ListObjectsV2Output::default();
        for_each_child(reader, "ListBucketResult", |reader, tag, _| {
            match tag {
                "Name" => output.name = Some(read_text_content(reader)?),
                "Prefix" => output.prefix = Some(read_text_content(reader)?),
                "Delimiter" => output.delimiter = Some(read_text_content(reader)?),
                "MaxKeys" => output.max_keys = Some(read_i32(reader)?),
                "KeyCount" => output.key_count = Some(read_i32(reader)?),
                "IsTruncated" => output.is_truncated = Some(read_bool(reader)?),
                "ContinuationToken" => {
                    output.continuation_token = Some(read_text_content(reader)?);
                }
                "NextContinuationToken" => {
                    output.next_continuation_token = Some(read_text_content(reader)?);
                }
                "StartAfter" => output.start_after = Some(read_text_content(reader)?),
                "EncodingType" => output.encoding_type = read_encoding_type(reader)?,
                "Contents" => output.contents.push(Object::deserialize_xml(reader)?),
                "CommonPrefixes" => output.common_prefixes.push(read_common_prefix(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for ListObjectVersionsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = ListObjectVersionsOutput::default();
        for_each_child(reader, "ListVersionsResult", |reader, tag, _| {
            match tag {
                "Name" => output.name = Some(read_text_content(reader)?),
                "Prefix" => output.prefix = Some(read_text_content(reader)?),
                "Delimiter" => output.delimiter = Some(read_text_content(reader)?),
                "MaxKeys" => output.max_keys = Some(read_i32(reader)?),
                "IsTruncated" => output.is_truncated = Some(read_bool(reader)?),
                "KeyMarker" => output.key_marker = Some(read_text_content(reader)?),
                "VersionIdMarker" => output.version_id_marker = Some(read_text_content(reader)?),
                "NextKeyMarker" => output.next_key_marker = Some(read_text_content(reader)?),
                "NextVersionIdMarker" => {
                    output.next_version_id_marker = Some(read_text_content(reader)?);
                }
                "EncodingType" => output.encoding_type = read_encoding_type(reader)?,
                "Version" => output.versions.push(ObjectVersion::deserialize_xml(reader)?),
                "DeleteMarker" => {
                    output
                        .delete_markers
                        .push(DeleteMarkerEntry::deserialize_xml(reader)?);
                }
                "CommonPrefixes" => output.common_prefixes.push(read_common_prefix(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for CreateMultipartUploadOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = CreateMultipartUploadOutput::default();
        for_each_child(reader, "InitiateMultipartUploadResult", |reader, tag, _| {
            match tag {
                "Bucket" => output.bucket = Some(read_text_content(reader)?),
                "Key" => output.key = Some(read_text_content(reader)?),
                "UploadId" => output.upload_id = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for CompleteMultipartUploadOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = CompleteMultipartUploadOutput::default();
        for_each_child(reader, "CompleteMultipartUploadResult", |reader, tag, _| {
            match tag {
                "Location" => output.location = Some(read_text_content(reader)?),
                "Bucket" => output.bucket = Some(read_text_content(reader)?),
                "Key" => output.key = Some(read_text_content(reader)?),
                "ETag" => output.e_tag = Some(read_text_content(reader)?),
                _ => read_checksum_or_skip(reader, tag, &mut output.checksums)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for ListPartsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = ListPartsOutput::default();
        for_each_child(reader, "ListPartsResult", |reader, tag, _| {
            match tag {
                "Bucket" => output.bucket = Some(read_text_content(reader)?),
                "Key" => output.key = Some(read_text_content(reader)?),
                "UploadId" => output.upload_id = Some(read_text_content(reader)?),
                "PartNumberMarker" => output.part_number_marker = Some(read_text_content(reader)?),
                "NextPartNumberMarker" => {
                    output.next_part_number_marker = Some(read_text_content(reader)?);
                }
                "MaxParts" => output.max_parts = Some(read_i32(reader)?),
                "IsTruncated" => output.is_truncated = Some(read_bool(reader)?),
                "Part" => output.parts.push(Part::deserialize_xml(reader)?),
                "Initiator" => output.initiator = Some(Initiator::deserialize_xml(reader)?),
                "Owner" => output.owner = Some(Owner::deserialize_xml(reader)?),
                "StorageClass" => {
                    output.storage_class =
                        read_enum(reader, "StorageClass", StorageClass::from_wire)?;
                }
                "ChecksumAlgorithm" => {
                    output.checksum_algorithm =
                        read_enum(reader, "ChecksumAlgorithm", ChecksumAlgorithm::from_wire)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl S3Deserialize for ListMultipartUploadsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = ListMultipartUploadsOutput::default();
        for_each_child(reader, "ListMultipartUploadsResult", |reader, tag, _| {
            match tag {
                "Bucket" => output.bucket = Some(read_text_content(reader)?),
                "KeyMarker" => output.key_marker = Some(read_text_content(reader)?),
                "UploadIdMarker" => output.upload_id_marker = Some(read_text_content(reader)?),
                "NextKeyMarker" => output.next_key_marker = Some(read_text_content(reader)?),
                "NextUploadIdMarker" => {
                    output.next_upload_id_marker = Some(read_text_content(reader)?);
                }
                "Prefix" => output.prefix = Some(read_text_content(reader)?),
                "Delimiter" => output.delimiter = Some(read_text_content(reader)?),
                "MaxUploads" => output.max_uploads = Some(read_i32(reader)?),
                "IsTruncated" => output.is_truncated = Some(read_bool(reader)?),
                "EncodingType" => output.encoding_type = read_encoding_type(reader)?,
                "Upload" => output.uploads.push(MultipartUpload::deserialize_xml(reader)?),
                "CommonPrefixes" => output.common_prefixes.push(read_common_prefix(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_list_buckets() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
            <Owner><ID>owner-id</ID><DisplayName>me</DisplayName></Owner>
            <Buckets>
                <Bucket><Name>alpha</Name><CreationDate>2024-01-02T03:04:05.000Z</CreationDate></Bucket>
                <Bucket><Name>beta</Name><CreationDate>2024-02-02T03:04:05.000Z</CreationDate></Bucket>
            </Buckets>
            <ContinuationToken>next-page</ContinuationToken>
        </ListAllMyBucketsResult>"#;

        let output: ListBucketsOutput = from_xml(xml).unwrap();
        assert_eq!(output.buckets.len(), 2);
        assert_eq!(output.buckets[1].name.as_deref(), Some("beta"));
        assert_eq!(
            output.buckets[0].creation_date.unwrap().to_rfc3339(),
            "2024-01-02T03:04:05+00:00"
        );
        assert_eq!(output.owner.unwrap().id.as_deref(), Some("owner-id"));
        assert_eq!(output.continuation_token.as_deref(), Some("next-page"));
    }

    #[test]
    fn test_should_deserialize_list_objects_v2() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
            <Name>photos</Name>
            <Prefix>2024/</Prefix>
            <KeyCount>2</KeyCount>
            <MaxKeys>2</MaxKeys>
            <Delimiter>/</Delimiter>
            <IsTruncated>true</IsTruncated>
            <NextContinuationToken>1ueGcxLPRx1Tr</NextContinuationToken>
            <Contents>
                <Key>2024/a&amp;b.jpg</Key>
                <LastModified>2024-05-01T10:00:00.000Z</LastModified>
                <ETag>&quot;9b2cf535f27731c974343645a3985328&quot;</ETag>
                <Size>1024</Size>
                <StorageClass>STANDARD</StorageClass>
                <ChecksumAlgorithm>CRC32</ChecksumAlgorithm>
            </Contents>
            <Contents>
                <Key>2024/c.jpg</Key>
                <Size>10</Size>
                <StorageClass>SOMETHING_NEW</StorageClass>
            </Contents>
            <CommonPrefixes><Prefix>2024/raw/</Prefix></CommonPrefixes>
        </ListBucketResult>"#;

        let output: ListObjectsV2Output = from_xml(xml).unwrap();
        assert_eq!(output.name.as_deref(), Some("photos"));
        assert_eq!(output.is_truncated, Some(true));
        assert_eq!(output.next_continuation_token.as_deref(), Some("1ueGcxLPRx1Tr"));
        assert_eq!(output.contents.len(), 2);
        assert_eq!(output.contents[0].key.as_deref(), Some("2024/a&b.jpg"));
        assert_eq!(
            output.contents[0].e_tag.as_deref(),
            Some("\"9b2cf535f27731c974343645a3985328\"")
        );
        assert_eq!(output.contents[0].checksum_algorithm, vec![ChecksumAlgorithm::Crc32]);
        assert_eq!(output.contents[1].storage_class, None);
        assert_eq!(output.common_prefixes[0].prefix.as_deref(), Some("2024/raw/"));
    }

    #[test]
    fn test_should_deserialize_object_versions_and_markers() {
        let xml = br#"<ListVersionsResult>
            <Name>b</Name>
            <IsTruncated>true</IsTruncated>
            <NextKeyMarker>k2</NextKeyMarker>
            <NextVersionIdMarker>v9</NextVersionIdMarker>
            <Version><Key>k1</Key><VersionId>v1</VersionId><IsLatest>true</IsLatest><Size>3</Size></Version>
            <DeleteMarker><Key>k1</Key><VersionId>v0</VersionId><IsLatest>false</IsLatest></DeleteMarker>
        </ListVersionsResult>"#;

        let output: ListObjectVersionsOutput = from_xml(xml).unwrap();
        assert_eq!(output.versions.len(), 1);
        assert_eq!(output.versions[0].is_latest, Some(true));
        assert_eq!(output.delete_markers[0].version_id.as_deref(), Some("v0"));
        assert_eq!(output.next_version_id_marker.as_deref(), Some("v9"));
    }

    #[test]
    fn test_should_deserialize_acl_with_grantee_types() {
        let xml = br#"<AccessControlPolicy xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
            <Owner><ID>owner</ID></Owner>
            <AccessControlList>
                <Grant>
                    <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="CanonicalUser">
                        <ID>owner</ID>
                    </Grantee>
                    <Permission>FULL_CONTROL</Permission>
                </Grant>
                <Grant>
                    <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="Group">
                        <URI>http://acs.amazonaws.com/groups/global/AllUsers</URI>
                    </Grantee>
                    <Permission>READ</Permission>
                </Grant>
            </AccessControlList>
        </AccessControlPolicy>"#;

        let policy: AccessControlPolicy = from_xml(xml).unwrap();
        assert_eq!(policy.grants.len(), 2);
        let group = policy.grants[1].grantee.as_ref().unwrap();
        assert_eq!(group.r#type, GranteeType::Group);
        assert_eq!(
            group.uri.as_deref(),
            Some("http://acs.amazonaws.com/groups/global/AllUsers")
        );
        assert_eq!(policy.grants[0].permission, Some(Permission::FullControl));
    }

    #[test]
    fn test_should_read_location_constraint() {
        let eu: GetBucketLocationOutput = from_xml(
            br#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/">eu-west-1</LocationConstraint>"#,
        )
        .unwrap();
        assert_eq!(eu.location_constraint, Some(BucketLocationConstraint::EuWest1));

        let us: GetBucketLocationOutput = from_xml(
            br#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        )
        .unwrap();
        assert_eq!(us.region(), "us-east-1");
    }

    #[test]
    fn test_should_read_unversioned_bucket_as_empty() {
        let output: GetBucketVersioningOutput = from_xml(
            br#"<VersioningConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        )
        .unwrap();
        assert!(output.status.is_none());
    }

    #[test]
    fn test_should_deserialize_delete_result() {
        let xml = br#"<DeleteResult>
            <Deleted><Key>a</Key></Deleted>
            <Deleted><Key>b</Key><DeleteMarker>true</DeleteMarker><DeleteMarkerVersionId>dm1</DeleteMarkerVersionId></Deleted>
            <Error><Key>c</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>
        </DeleteResult>"#;

        let output: DeleteObjectsOutput = from_xml(xml).unwrap();
        assert_eq!(output.deleted.len(), 2);
        assert_eq!(output.deleted[1].delete_marker, Some(true));
        assert_eq!(output.errors[0].code.as_deref(), Some("AccessDenied"));
    }

    #[test]
    fn test_should_deserialize_multipart_results() {
        let initiate: CreateMultipartUploadOutput = from_xml(
            b"<InitiateMultipartUploadResult><Bucket>b</Bucket><Key>k</Key><UploadId>u-1</UploadId></InitiateMultipartUploadResult>",
        )
        .unwrap();
        assert_eq!(initiate.upload_id.as_deref(), Some("u-1"));

        let complete: CompleteMultipartUploadOutput = from_xml(
            b"<CompleteMultipartUploadResult><Location>http://b.s3.amazonaws.com/k</Location><ETag>\"e-2\"</ETag><ChecksumCRC32>AAAAAA==</ChecksumCRC32></CompleteMultipartUploadResult>",
        )
        .unwrap();
        assert_eq!(complete.e_tag.as_deref(), Some("\"e-2\""));
        assert_eq!(complete.checksums.crc32.as_deref(), Some("AAAAAA=="));

        let parts: ListPartsOutput = from_xml(
            b"<ListPartsResult><UploadId>u-1</UploadId><IsTruncated>true</IsTruncated><NextPartNumberMarker>1</NextPartNumberMarker><Part><PartNumber>1</PartNumber><ETag>\"p1\"</ETag><Size>5242880</Size></Part></ListPartsResult>",
        )
        .unwrap();
        assert_eq!(parts.parts[0].size, Some(5_242_880));
        assert_eq!(parts.next_part_number_marker.as_deref(), Some("1"));
    }

    #[test]
    fn test_should_deserialize_cors_and_tagging() {
        let cors: CORSConfiguration = from_xml(
            b"<CORSConfiguration><CORSRule><AllowedMethod>GET</AllowedMethod><AllowedMethod>PUT</AllowedMethod><AllowedOrigin>*</AllowedOrigin><MaxAgeSeconds>3000</MaxAgeSeconds></CORSRule></CORSConfiguration>",
        )
        .unwrap();
        assert_eq!(cors.cors_rules[0].allowed_methods, vec!["GET", "PUT"]);
        assert_eq!(cors.cors_rules[0].max_age_seconds, Some(3000));

        let tagging: Tagging = from_xml(
            b"<Tagging><TagSet><Tag><Key>env</Key><Value>prod</Value></Tag></TagSet></Tagging>",
        )
        .unwrap();
        assert_eq!(tagging.tag_set, vec![Tag::new("env", "prod")]);
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let result: Result<ListObjectsV2Output, _> =
            from_xml(b"<ListBucketResult><Name>b</Name>");
        assert!(result.is_err());
        let empty: Result<ListObjectsV2Output, _> = from_xml(b"");
        assert!(matches!(empty, Err(XmlError::MissingElement(_))));
    }
}
