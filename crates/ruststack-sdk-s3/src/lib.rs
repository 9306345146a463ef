//! Amazon S3 client for the RustStack AWS SDK.
//!
//! [`S3Client`] exposes one async method per S3 operation, paginators for
//! the listing operations, existence waiters, and presigned URLs.
//!
//! Requests use virtual-hosted addressing (`bucket.s3.region.amazonaws.com`)
//! unless path-style is forced in [`ClientConfig`] or the bucket name is not
//! a valid DNS label.

pub mod client;
pub mod paginators;
pub mod presign;
pub mod waiters;

pub use client::S3Client;
pub use presign::MAX_PRESIGN_EXPIRY;
pub use ruststack_sdk_core::{ClientConfig, Credentials, SdkError, SdkResult, ServiceError};
pub use ruststack_sdk_runtime::{Paginator, Waiter, WaiterConfig, WaiterState};
pub use ruststack_sdk_s3_model::{S3Operation, StreamingBlob, input, output, types};
pub use waiters::DEFAULT_WAITER_CONFIG;
