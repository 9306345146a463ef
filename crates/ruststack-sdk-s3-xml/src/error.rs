//! XML error type and S3 `<Error>` documents.

use quick_xml::Reader;
use quick_xml::events::Event;
use ruststack_sdk_core::SdkError;

use crate::deserialize::{S3Deserialize, for_each_child, from_xml, read_text_content, skip_element};

/// Errors that can occur during S3 XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

impl From<XmlError> for SdkError {
    fn from(err: XmlError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// An S3 error body.
///
/// ```xml
/// <Error>
///   <Code>NoSuchBucket</Code>
///   <Message>The specified bucket does not exist</Message>
///   <BucketName>mybucket</BucketName>
///   <RequestId>4442587FB7D0A2F9</RequestId>
///   <HostId>...</HostId>
/// </Error>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDocument {
    /// Error code, e.g. `NoSuchBucket`.
    pub code: String,
    /// Human-readable description.
    pub message: Option<String>,
    /// Bucket or object the error refers to.
    pub resource: Option<String>,
    /// `RequestId` assigned by the service.
    pub request_id: Option<String>,
    /// Extended request id (`x-amz-id-2`).
    pub host_id: Option<String>,
    /// Region hint sent with redirects.
    pub region: Option<String>,
}

impl S3Deserialize for ErrorDocument {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut doc = Self::default();
        for_each_child(reader, "Error", |reader, tag, _| {
            match tag {
                "Code" => doc.code = read_text_content(reader)?,
                "Message" => doc.message = Some(read_text_content(reader)?),
                "Resource" => doc.resource = Some(read_text_content(reader)?),
                "RequestId" => doc.request_id = Some(read_text_content(reader)?),
                "HostId" => doc.host_id = Some(read_text_content(reader)?),
                "Region" => doc.region = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        if doc.code.is_empty() {
            return Err(XmlError::MissingElement("Error/Code".to_owned()));
        }
        Ok(doc)
    }
}

/// Parse an `<Error>` body.
pub fn parse_error_document(xml: &[u8]) -> Result<ErrorDocument, XmlError> {
    if !is_error_document(xml) {
        return Err(XmlError::MissingElement("Error".to_owned()));
    }
    from_xml(xml)
}

/// Whether the root element of `xml` is `<Error>`.
///
/// `CopyObject` and `CompleteMultipartUpload` can answer `200 OK` and still
/// carry an error body.
#[must_use]
pub fn is_error_document(xml: &[u8]) -> bool {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => return e.local_name().as_ref() == b"Error",
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}
