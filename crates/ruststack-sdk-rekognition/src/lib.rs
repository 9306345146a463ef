//! Amazon Rekognition client for the RustStack AWS SDK.
//!
//! [`RekognitionClient`] sends `awsJson1_1` requests (see [`codec`]) for
//! face collections, face search, image analysis and Custom Labels
//! projects, with paginators for the list operations.

pub mod client;
pub mod codec;
pub mod paginators;

pub use client::RekognitionClient;
pub use ruststack_sdk_core::{ClientConfig, Credentials, SdkError, SdkResult, ServiceError};
pub use ruststack_sdk_rekognition_model::{
    OperationInput, RekognitionOperation, input, output, types,
};
pub use ruststack_sdk_runtime::Paginator;
