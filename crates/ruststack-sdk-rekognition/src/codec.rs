//! `awsJson1_1` request encoding and response decoding.
//!
//! Every request is a `POST /` whose JSON body is the serialized input and
//! whose operation is named by the `X-Amz-Target` header:
//!
//! ```text
//! POST / HTTP/1.1
//! Content-Type: application/x-amz-json-1.1
//! X-Amz-Target: RekognitionService.DetectLabels
//! ```
//!
//! Errors come back as a non-2xx status with a JSON body:
//!
//! ```json
//! {"__type": "com.amazonaws.rekognition#InvalidParameterException", "message": "..."}
//! ```

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use ruststack_sdk_core::{Endpoint, SdkError, ServiceError};
use ruststack_sdk_rekognition_model::OperationInput;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Content type of every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const TARGET_HEADER: &str = "x-amz-target";
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Validate `input` and build the HTTP request for `endpoint`.
pub fn encode_request<I: OperationInput>(
    input: &I,
    endpoint: &Endpoint,
) -> Result<http::Request<Bytes>, SdkError> {
    input.validate()?;
    let body = serde_json::to_vec(input)
        .map_err(|e| SdkError::Request(format!("failed to serialize {}: {e}", I::OPERATION)))?;
    http::Request::builder()
        .method(http::Method::POST)
        .uri(format!("{}/", endpoint.base_url()))
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(TARGET_HEADER, I::OPERATION.target())
        .body(Bytes::from(body))
        .map_err(|e| SdkError::Request(e.to_string()))
}

/// Decode a response into `O`, or into [`SdkError::Service`] for a non-2xx status.
pub fn decode_response<O: DeserializeOwned + Default>(
    response: &http::Response<Bytes>,
) -> Result<O, SdkError> {
    if !response.status().is_success() {
        return Err(SdkError::Service(error_from_response(response)));
    }
    let body = response.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice(body).map_err(|e| SdkError::Decode(e.to_string()))
}

/// Build a [`ServiceError`] from an error response.
///
/// The code comes from the `x-amzn-ErrorType` header when present, otherwise
/// from the body's `__type`, with any namespace prefix removed.
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
    error.request_id = header(REQUEST_ID_HEADER);

    let body: Option<serde_json::Value> = serde_json::from_slice(response.body())
        .inspect_err(|err| {
            if !response.body().is_empty() {
                debug!(status, error = %err, "error response body is not JSON");
            }
        })
        .ok();
    let body_field = |name: &str| {
        body.as_ref()
            .and_then(|v| v.get(name))
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned)
    };

    if let Some(code) = header(ERROR_TYPE_HEADER).or_else(|| body_field("__type")) {
        error.code = sanitize_error_code(&code).to_owned();
    }
    error.message = body_field("message").or_else(|| body_field("Message"));
    error
}

/// `aws.protocoltests#FooError:http://...` -> `FooError`.
fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit('#').next().unwrap_or(code)
}
