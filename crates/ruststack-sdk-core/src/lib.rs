//! Core types, configuration, and endpoint resolution for the RustStack AWS SDK.
//!
//! This crate provides the building blocks shared by every service client:
//! client configuration, static credentials, the region type, the static
//! service/region endpoint table, and the common [`SdkError`] type.

mod config;
mod credentials;
pub mod endpoint;
mod error;
mod pagination;
mod types;

pub use config::ClientConfig;
pub use credentials::Credentials;
pub use endpoint::{Endpoint, ServiceId, resolve_endpoint};
pub use error::{SdkError, SdkResult, ServiceError, TransportError};
pub use pagination::PageableResponse;
pub use types::AwsRegion;
