//! S3 operation outputs.
//!
//! List outputs implement [`PageableResponse`](ruststack_sdk_core::PageableResponse)
//! so they can drive a paginator.

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}
