//! HTTP error responses to [`ServiceError`].
//!
//! S3 reports failures as a non-2xx status with a flat `<Error>` document.
//! HEAD responses have no body, so the code is derived from the status.

use bytes::Bytes;
use ruststack_sdk_core::{SdkError, ServiceError};
use ruststack_sdk_s3_xml::parse_error_document;
use tracing::debug;

/// Build a [`ServiceError`] from an error response.
#[must_use]
pub fn error_from_response(response: &http::Response<Bytes>) -> ServiceError {
    let status = response.status().as_u16();
    let headers = response.headers();
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    };

    let mut error = ServiceError::new(status, ServiceError::code_for_status(status));
    error.request_id = header("x-amz-request-id");
    error.host_id = header("x-amz-id-2");

    if response.body().is_empty() {
        return error;
    }
    match parse_error_document(response.body()) {
        Ok(doc) => {
            if let Some(region) = &doc.region {
                debug!(code = %doc.code, region = %region, "error carries a region hint");
            }
            error.code = doc.code;
            error.message = doc.message;
            error.request_id = error.request_id.or(doc.request_id);
            error.host_id = error.host_id.or(doc.host_id);
        }
        Err(err) => {
            debug!(status, error = %err, "error response body is not an S3 error document");
        }
    }
    error
}

/// Pass a 2xx response through and turn anything else into [`SdkError::Service`].
pub fn check_status(response: http::Response<Bytes>) -> Result<http::Response<Bytes>, SdkError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(SdkError::Service(error_from_response(&response)))
    }
}
