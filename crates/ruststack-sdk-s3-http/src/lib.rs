//! S3 HTTP bindings for the RustStack AWS SDK.
//!
//! This crate turns S3 operation inputs into HTTP requests and HTTP
//! responses back into outputs:
//!
//! - [`request`]: [`IntoS3Request`] for every input (URI labels, query,
//!   headers, payload) and [`S3HttpRequest`], which applies bucket addressing.
//! - [`response`]: [`FromS3Response`] for every output (headers and XML/raw body).
//! - [`error`]: `<Error>` documents and bare statuses to `ServiceError`.
//! - [`addressing`]: virtual-hosted vs path-style bucket addressing.
//! - [`checksums`]: `Content-MD5` and `x-amz-checksum-*` values.

pub mod addressing;
pub mod checksums;
pub mod error;
pub mod request;
pub mod response;

pub use addressing::{Addressing, select_addressing};
pub use error::{check_status, error_from_response};
pub use request::{IntoS3Request, S3HttpRequest};
pub use response::FromS3Response;
