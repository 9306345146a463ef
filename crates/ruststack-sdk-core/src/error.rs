//! Error types shared by every service client.

use std::fmt;
use std::time::Duration;

/// Failure reported by the HTTP transport before a response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport failure (TLS, body read, ...).
    #[error("transport error: {0}")]
    Other(String),
}

/// An error returned by the AWS service itself (non-success HTTP status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code.
    pub status: u16,
    /// AWS error code, e.g. `NoSuchBucket` or `InvalidParameterException`.
    pub code: String,
    /// Human readable message, if the service sent one.
    pub message: Option<String>,
    /// Request id (`x-amz-request-id` / `x-amzn-RequestId`).
    pub request_id: Option<String>,
    /// S3 extended request id (`x-amz-id-2`).
    pub host_id: Option<String>,
}

impl ServiceError {
    /// Create an error with only status and code.
    #[must_use]
    pub fn new(status: u16, code: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: None,
            request_id: None,
            host_id: None,
        }
    }

    /// Error code derived from a bare status, for responses without a body (HEAD).
    #[must_use]
    pub fn code_for_status(status: u16) -> &'static str {
        match status {
            301 => "PermanentRedirect",
            304 => "NotModified",
            400 => "BadRequest",
            403 => "Forbidden",
            404 => "NotFound",
            405 => "MethodNotAllowed",
            409 => "Conflict",
            412 => "PreconditionFailed",
            416 => "InvalidRange",
            500 => "InternalError",
            503 => "ServiceUnavailable",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.code, self.status)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id: {request_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

/// Error type returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// A required field is missing or a field value is not acceptable.
    #[error("{operation}: {message}")]
    Validation {
        /// Operation being built.
        operation: &'static str,
        /// What is wrong.
        message: String,
    },

    /// A string is not one of the values allowed for an enumeration.
    #[error("invalid value {value:?} for {type_name}")]
    InvalidEnumValue {
        /// Enumeration type name.
        type_name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The static endpoint table has no entry for the region.
    #[error("service {service} is not available in region {region}")]
    UnsupportedRegion {
        /// Service identifier.
        service: &'static str,
        /// Requested region.
        region: String,
    },

    /// The configured custom endpoint could not be parsed.
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),

    /// The request could not be assembled (e.g. a header value is not valid ASCII).
    #[error("failed to build request: {0}")]
    Request(String),

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// The HTTP transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with an error.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The response could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A waiter reached its failure state.
    #[error("waiter {waiter} failed: {reason}")]
    WaiterFailed {
        /// Waiter name.
        waiter: &'static str,
        /// Last observed outcome.
        reason: String,
    },

    /// A waiter did not reach a terminal state in time.
    #[error("waiter {waiter} timed out after {timeout:?}")]
    WaiterTimeout {
        /// Waiter name.
        waiter: &'static str,
        /// Configured timeout.
        timeout: Duration,
    },
}

impl SdkError {
    /// Build a validation error.
    #[must_use]
    pub fn validation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            operation,
            message: message.into(),
        }
    }

    /// Build the validation error for a missing required member.
    #[must_use]
    pub fn missing_field(operation: &'static str, field: &str) -> Self {
        Self::Validation {
            operation,
            message: format!("missing required field `{field}`"),
        }
    }

    /// Build an invalid enum value error.
    #[must_use]
    pub fn invalid_enum(type_name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            type_name,
            value: value.into(),
        }
    }

    /// HTTP status of a service error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service(err) => Some(err.status),
            _ => None,
        }
    }

    /// AWS error code of a service error.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service(err) => Some(err.code.as_str()),
            _ => None,
        }
    }

    /// Whether the error was raised locally before any network I/O.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidEnumValue { .. }
                | Self::UnsupportedRegion { .. }
                | Self::InvalidEndpoint(_)
                | Self::Request(_)
                | Self::Signing(_)
        )
    }
}

/// Convenience result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_service_error() {
        let err = ServiceError {
            message: Some("The specified bucket does not exist".to_owned()),
            request_id: Some("4442587FB7D0A2F9".to_owned()),
            ..ServiceError::new(404, "NoSuchBucket")
        };
        assert_eq!(
            err.to_string(),
            "NoSuchBucket (HTTP 404): The specified bucket does not exist [request id: 4442587FB7D0A2F9]"
        );
    }

    #[test]
    fn test_should_expose_status_and_code() {
        let err = SdkError::from(ServiceError::new(403, "AccessDenied"));
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.code(), Some("AccessDenied"));
        assert!(!err.is_local());
    }

    #[test]
    fn test_should_classify_local_errors() {
        let err = SdkError::missing_field("PutObject", "Bucket");
        assert!(err.is_local());
        assert_eq!(err.to_string(), "PutObject: missing required field `Bucket`");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_should_map_status_to_code() {
        assert_eq!(ServiceError::code_for_status(404), "NotFound");
        assert_eq!(ServiceError::code_for_status(403), "Forbidden");
        assert_eq!(ServiceError::code_for_status(418), "Unknown");
    }
}
