//! Rekognition model types for the RustStack AWS SDK.
//!
//! Rekognition speaks `awsJson1_1`, so the types are plain serde structs with
//! `PascalCase` member names. Inputs carry `validate()`; outputs tolerate
//! missing members and enumeration values this client does not know yet.
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use operations::{OperationInput, RekognitionOperation};
