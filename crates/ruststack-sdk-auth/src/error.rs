//! Error types for request signing.

/// Errors that can occur while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request URI has no host to sign.
    #[error("request URI has no host")]
    MissingHost,

    /// A header value is not visible ASCII and cannot be signed.
    #[error("header {0} has a value that cannot be signed")]
    InvalidHeaderValue(String),

    /// A header produced during signing could not be encoded.
    #[error("failed to set header {0}")]
    HeaderEncoding(&'static str),

    /// Presigned URL expiry outside 1 second .. 7 days.
    #[error("presigned URL expiry must be between 1 and 604800 seconds, got {0}")]
    InvalidExpiry(u64),
}

impl From<AuthError> for ruststack_sdk_core::SdkError {
    fn from(err: AuthError) -> Self {
        Self::Signing(err.to_string())
    }
}
