//! S3 XML serialization: writing request payloads.
//!
//! Payloads carry the S3 namespace on the root element and an XML
//! declaration. Booleans are lowercase.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use ruststack_sdk_s3_model::types::{
    AccessControlPolicy, CORSConfiguration, CORSRule, Checksums, CompletedMultipartUpload,
    CompletedPart, CreateBucketConfiguration, Delete, Grant, Grantee, ObjectIdentifier, Owner, Tag,
    Tagging, VersioningConfiguration,
};

use crate::error::XmlError;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Trait for serializing S3 types to XML.
///
/// Implementors write their content as child elements inside the current XML
/// context. The root element is written by [`to_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait S3Serialize {
    /// Serialize this value as XML child elements into the given writer.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize `value` as a complete S3 XML document rooted at `root_element`.
pub fn to_xml<T: S3Serialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(root_element)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "true" } else { "false" })?;
    }
    Ok(())
}

fn write_optional_i32<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i32>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

fn write_checksums<W: Write>(writer: &mut Writer<W>, checksums: &Checksums) -> io::Result<()> {
    write_optional_text(writer, "ChecksumCRC32", checksums.crc32.as_deref())?;
    write_optional_text(writer, "ChecksumCRC32C", checksums.crc32c.as_deref())?;
    write_optional_text(writer, "ChecksumSHA1", checksums.sha1.as_deref())?;
    write_optional_text(writer, "ChecksumSHA256", checksums.sha256.as_deref())?;
    Ok(())
}

impl S3Serialize for CreateBucketConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(
            writer,
            "LocationConstraint",
            self.location_constraint.as_ref().map(|c| c.as_str()),
        )
    }
}

impl S3Serialize for Tag {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Tag").write_inner_content(|w| {
            write_text_element(w, "Key", &self.key)?;
            write_text_element(w, "Value", &self.value)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for Tagging {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("TagSet").write_inner_content(|w| {
            for tag in &self.tag_set {
                tag.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for Owner {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Owner").write_inner_content(|w| {
            write_optional_text(w, "ID", self.id.as_deref())?;
            write_optional_text(w, "DisplayName", self.display_name.as_deref())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for Grantee {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Grantee")
            .with_attribute(("xmlns:xsi", XSI_NAMESPACE))
            .with_attribute(("xsi:type", self.r#type.as_str()))
            .write_inner_content(|w| {
                write_optional_text(w, "DisplayName", self.display_name.as_deref())?;
                write_optional_text(w, "EmailAddress", self.email_address.as_deref())?;
                write_optional_text(w, "ID", self.id.as_deref())?;
                write_optional_text(w, "URI", self.uri.as_deref())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl S3Serialize for Grant {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Grant").write_inner_content(|w| {
            if let Some(ref grantee) = self.grantee {
                grantee.serialize_xml(w)?;
            }
            write_optional_text(w, "Permission", self.permission.as_ref().map(|p| p.as_str()))?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for AccessControlPolicy {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        if let Some(ref owner) = self.owner {
            owner.serialize_xml(writer)?;
        }
        writer
            .create_element("AccessControlList")
            .write_inner_content(|w| {
                for grant in &self.grants {
                    grant.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl S3Serialize for VersioningConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Status", self.status.as_ref().map(|s| s.as_str()))?;
        write_optional_text(
            writer,
            "MfaDelete",
            self.mfa_delete.as_ref().map(|m| m.as_str()),
        )?;
        Ok(())
    }
}

impl S3Serialize for CORSRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("CORSRule").write_inner_content(|w| {
            write_optional_text(w, "ID", self.id.as_deref())?;
            for h in &self.allowed_headers {
                write_text_element(w, "AllowedHeader", h)?;
            }
            for m in &self.allowed_methods {
                write_text_element(w, "AllowedMethod", m)?;
            }
            for o in &self.allowed_origins {
                write_text_element(w, "AllowedOrigin", o)?;
            }
            for h in &self.expose_headers {
                write_text_element(w, "ExposeHeader", h)?;
            }
            write_optional_i32(w, "MaxAgeSeconds", self.max_age_seconds)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for CORSConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for rule in &self.cors_rules {
            rule.serialize_xml(writer)?;
        }
        Ok(())
    }
}

impl S3Serialize for ObjectIdentifier {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Object").write_inner_content(|w| {
            write_text_element(w, "Key", &self.key)?;
            write_optional_text(w, "VersionId", self.version_id.as_deref())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for Delete {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for object in &self.objects {
            object.serialize_xml(writer)?;
        }
        write_optional_bool(writer, "Quiet", self.quiet)?;
        Ok(())
    }
}

impl S3Serialize for CompletedPart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Part").write_inner_content(|w| {
            write_optional_text(w, "ETag", self.e_tag.as_deref())?;
            write_checksums(w, &self.checksums)?;
            write_optional_i32(w, "PartNumber", self.part_number)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl S3Serialize for CompletedMultipartUpload {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for part in &self.parts {
            part.serialize_xml(writer)?;
        }
        Ok(())
    }
}
