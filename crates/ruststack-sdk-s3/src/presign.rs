//! Presigned URLs.
//!
//! Only the query parameters and the host header are signed. Request headers
//! set on the input (content type, metadata, ...) are not part of the URL and
//! must not be required by the holder of the URL.

use std::time::Duration;

use ruststack_sdk_core::SdkError;
use ruststack_sdk_s3_http::IntoS3Request;
use ruststack_sdk_s3_model::input::{GetObjectInput, PutObjectInput};
use tracing::debug;

use crate::S3Client;

pub use ruststack_sdk_auth::MAX_PRESIGN_EXPIRY;

impl S3Client {
    fn presign<I: IntoS3Request>(&self, input: I, expires_in: Duration) -> Result<String, SdkError> {
        let operation = I::OPERATION.as_str();
        if expires_in.is_zero() || expires_in > MAX_PRESIGN_EXPIRY {
            return Err(SdkError::validation(
                operation,
                format!("presign expiry must be between 1 second and 7 days, got {expires_in:?}"),
            ));
        }
        let request = input.into_s3_request()?;
        let uri = request.uri(self.inner.endpoint(), self.inner.config().force_path_style)?;
        let url = self.inner.presign(&request.method, &uri, expires_in)?;
        debug!(operation, expires_in = expires_in.as_secs(), "presigned url");
        Ok(url)
    }

    /// Presigned `GET` URL for an object.
    pub fn presign_get_object(
        &self,
        input: GetObjectInput,
        expires_in: Duration,
    ) -> Result<String, SdkError> {
        self.presign(input, expires_in)
    }

    /// Presigned `PUT` URL for an object. The input body is ignored.
    pub fn presign_put_object(
        &self,
        mut input: PutObjectInput,
        expires_in: Duration,
    ) -> Result<String, SdkError> {
        input.body = ruststack_sdk_s3_model::StreamingBlob::default();
        input.compute_content_md5 = false;
        self.presign(input, expires_in)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ruststack_sdk_core::ClientConfig;
    use ruststack_sdk_runtime::StaticReplayTransport;

    use super::*;
    use crate::client::tests::client;

    fn get_input() -> GetObjectInput {
        GetObjectInput {
            bucket: "my-bucket".to_owned(),
            key: "photos/cat 1.jpg".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_presign_get_object() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        let url = client
            .presign_get_object(get_input(), Duration::from_secs(900))
            .unwrap();

        assert!(url.starts_with("https://my-bucket.s3.us-west-2.amazonaws.com/photos/cat%201.jpg?"));
        assert!(url.contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
        assert!(url.contains("X-Amz-Expires=900"));
        assert!(url.contains("X-Amz-SignedHeaders=host"));
        assert!(url.contains("X-Amz-Signature="));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_should_presign_put_object() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("eu-west-1", &transport);

        let url = client
            .presign_put_object(
                PutObjectInput {
                    bucket: "my-bucket".to_owned(),
                    key: "upload.bin".to_owned(),
                    body: ruststack_sdk_s3_model::StreamingBlob::new("ignored"),
                    ..Default::default()
                },
                Duration::from_secs(60),
            )
            .unwrap();

        assert!(url.starts_with("https://my-bucket.s3.eu-west-1.amazonaws.com/upload.bin?"));
        assert!(url.contains("X-Amz-Credential=AKIDEXAMPLE%2F"));
    }

    #[test]
    fn test_should_accept_the_signer_maximum_expiry() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        assert_eq!(MAX_PRESIGN_EXPIRY, ruststack_sdk_auth::MAX_PRESIGN_EXPIRY);
        let url = client.presign_get_object(get_input(), MAX_PRESIGN_EXPIRY).unwrap();
        assert!(url.contains("X-Amz-Expires=604800"));
    }

    #[test]
    fn test_should_presign_dot_segments_escaped() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        let url = client
            .presign_get_object(
                GetObjectInput {
                    bucket: "my-bucket".to_owned(),
                    key: "photos/../secret.txt".to_owned(),
                    ..Default::default()
                },
                Duration::from_secs(60),
            )
            .unwrap();

        assert!(url.starts_with(
            "https://my-bucket.s3.us-west-2.amazonaws.com/photos/%2E%2E/secret.txt?"
        ));
    }

    #[test]
    fn test_should_reject_out_of_range_expiry() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        let err = client
            .presign_get_object(get_input(), Duration::from_secs(8 * 24 * 60 * 60))
            .unwrap_err();
        assert!(err.is_local());
        assert!(client.presign_get_object(get_input(), Duration::ZERO).is_err());
    }

    #[test]
    fn test_should_require_credentials_to_presign() {
        let config = ClientConfig::builder().region("us-west-2").build();
        let client =
            S3Client::with_transport(config, Arc::new(StaticReplayTransport::new())).unwrap();

        let err = client
            .presign_get_object(get_input(), Duration::from_secs(60))
            .unwrap_err();
        assert!(matches!(err, SdkError::Signing(_)));
    }

    #[test]
    fn test_should_validate_before_presigning() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        let err = client
            .presign_get_object(
                GetObjectInput {
                    bucket: "my-bucket".to_owned(),
                    ..Default::default()
                },
                Duration::from_secs(60),
            )
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation { .. }));
    }
}
