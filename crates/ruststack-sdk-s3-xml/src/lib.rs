//! S3 RestXml bodies for the RustStack S3 client.
//!
//! This crate converts between S3 model types and the XML wire format:
//! request payloads are written with [`S3Serialize`] / [`to_xml`], response
//! payloads are read with [`S3Deserialize`] / [`from_xml`], and `<Error>`
//! documents are read with [`parse_error_document`].
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 format (`2006-02-03T16:45:09.000Z`)
//! - Errors are a flat `<Error>` element (`noErrorWrapping`)

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{S3Deserialize, from_xml};
pub use error::{ErrorDocument, XmlError, is_error_document, parse_error_document};
pub use serialize::{S3_NAMESPACE, S3Serialize, to_xml};
