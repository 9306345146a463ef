//! AWS Signature Version 4 signing for the RustStack AWS SDK.
//!
//! The crate signs outgoing requests (the `Authorization` header flavour) and
//! produces presigned URLs (the query-string flavour). Both share the
//! canonical request construction in [`canonical`].
//!
//! # Usage
//!
//! ```rust
//! use bytes::Bytes;
//! use chrono::{TimeZone, Utc};
//! use ruststack_sdk_auth::{SigningParams, SigningSettings, sign_request};
//! use ruststack_sdk_core::Credentials;
//!
//! let credentials = Credentials::new("AKIDEXAMPLE", "secret");
//! let mut request = http::Request::builder()
//!     .uri("https://s3.amazonaws.com/bucket/key")
//!     .body(Bytes::new())
//!     .unwrap();
//! let params = SigningParams {
//!     credentials: &credentials,
//!     region: "us-east-1",
//!     service: "s3",
//!     time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     settings: SigningSettings::s3(),
//! };
//! sign_request(&mut request, &params).unwrap();
//! assert!(request.headers().contains_key("authorization"));
//! ```

pub mod canonical;
pub mod error;
pub mod presign;
pub mod sigv4;

pub use error::AuthError;
pub use presign::{MAX_PRESIGN_EXPIRY, presign_url};
pub use sigv4::{SigningOutput, SigningParams, SigningSettings, hash_payload, sign_request};
