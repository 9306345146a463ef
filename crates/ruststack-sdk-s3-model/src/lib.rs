//! S3 model types for the RustStack AWS SDK.
//!
//! - [`types`]: enumerations and value objects (`Bucket`, `Object`, `Grant`, `Owner`, `Tag`, ...).
//! - [`input`]: one struct per operation, with `validate()` for required members.
//! - [`output`]: one struct per operation, populated from response headers and body.
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod types;

pub use operations::S3Operation;
pub use request::StreamingBlob;
