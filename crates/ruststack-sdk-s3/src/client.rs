//! The S3 client.

use std::sync::Arc;

use ruststack_sdk_auth::SigningSettings;
use ruststack_sdk_core::{ClientConfig, Endpoint, SdkError, ServiceId};
use ruststack_sdk_runtime::{HttpTransport, ServiceClient};
#[allow(clippy::wildcard_imports)]
use ruststack_sdk_s3_model::input::*;
#[allow(clippy::wildcard_imports)]
use ruststack_sdk_s3_model::output::*;
use ruststack_sdk_s3_model::types::{BucketLocationConstraint, CreateBucketConfiguration};
use ruststack_sdk_s3_http::{FromS3Response, IntoS3Request, check_status};
use tracing::debug;

/// Amazon S3 client.
///
/// One method per operation. Each method validates its input, builds the
/// request, signs and sends it, and parses the response. Cloning is cheap.
///
/// # Examples
///
/// ```no_run
/// use ruststack_sdk_core::ClientConfig;
/// use ruststack_sdk_s3::S3Client;
/// use ruststack_sdk_s3::input::ListObjectsV2Input;
///
/// # async fn run() -> Result<(), ruststack_sdk_core::SdkError> {
/// let client = S3Client::new(ClientConfig::from_env())?;
/// let page = client
///     .list_objects_v2(ListObjectsV2Input {
///         bucket: "my-bucket".to_owned(),
///         ..Default::default()
///     })
///     .await?;
/// for object in page.contents {
///     println!("{}", object.key.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct S3Client {
    pub(crate) inner: ServiceClient,
}

impl S3Client {
    /// Create a client using the default HTTP transport.
    ///
    /// Fails with [`SdkError::UnsupportedRegion`] when the region has no S3 endpoint.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        Ok(Self {
            inner: ServiceClient::new(ServiceId::S3, config, SigningSettings::s3())?,
        })
    }

    /// Create a client on top of an explicit transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            inner: ServiceClient::with_transport(
                ServiceId::S3,
                config,
                SigningSettings::s3(),
                transport,
            )?,
        })
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.inner.endpoint()
    }

    /// Run any S3 operation.
    pub async fn execute<I: IntoS3Request>(&self, input: I) -> Result<I::Output, SdkError> {
        let request = input
            .into_s3_request()?
            .into_http(self.inner.endpoint(), self.inner.config().force_path_style)?;
        let response = self.inner.send(I::OPERATION.as_str(), request).await?;
        let response = check_status(response).inspect_err(|err| {
            debug!(operation = %I::OPERATION, error = %err, "operation failed");
        })?;
        I::Output::from_s3_response(response)
    }

    fn default_location_constraint(&self) -> Option<BucketLocationConstraint> {
        let region = self.inner.endpoint().signing_region.as_str();
        if region == "us-east-1" {
            return None;
        }
        BucketLocationConstraint::from_wire(region)
    }

    // --- Bucket operations ---

    /// Create a bucket.
    ///
    /// Outside `us-east-1` the client region is sent as the location
    /// constraint unless the input sets one.
    pub async fn create_bucket(
        &self,
        mut input: CreateBucketInput,
    ) -> Result<CreateBucketOutput, SdkError> {
        if input.create_bucket_configuration.is_none() {
            input.create_bucket_configuration =
                self.default_location_constraint()
                    .map(|constraint| CreateBucketConfiguration {
                        location_constraint: Some(constraint),
                    });
        }
        self.execute(input).await
    }

    /// Delete an empty bucket.
    pub async fn delete_bucket(&self, input: DeleteBucketInput) -> Result<DeleteBucketOutput, SdkError> {
        self.execute(input).await
    }

    /// Check that a bucket exists and is accessible.
    pub async fn head_bucket(&self, input: HeadBucketInput) -> Result<HeadBucketOutput, SdkError> {
        self.execute(input).await
    }

    /// List buckets owned by the caller (one page).
    pub async fn list_buckets(&self, input: ListBucketsInput) -> Result<ListBucketsOutput, SdkError> {
        self.execute(input).await
    }

    /// Region constraint of a bucket.
    pub async fn get_bucket_location(
        &self,
        input: GetBucketLocationInput,
    ) -> Result<GetBucketLocationOutput, SdkError> {
        self.execute(input).await
    }

    /// Bucket access control list.
    pub async fn get_bucket_acl(&self, input: GetBucketAclInput) -> Result<GetBucketAclOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the bucket access control list.
    pub async fn put_bucket_acl(&self, input: PutBucketAclInput) -> Result<PutBucketAclOutput, SdkError> {
        self.execute(input).await
    }

    /// Bucket versioning state.
    pub async fn get_bucket_versioning(
        &self,
        input: GetBucketVersioningInput,
    ) -> Result<GetBucketVersioningOutput, SdkError> {
        self.execute(input).await
    }

    /// Enable or suspend versioning.
    pub async fn put_bucket_versioning(
        &self,
        input: PutBucketVersioningInput,
    ) -> Result<PutBucketVersioningOutput, SdkError> {
        self.execute(input).await
    }

    /// Bucket tag set.
    pub async fn get_bucket_tagging(
        &self,
        input: GetBucketTaggingInput,
    ) -> Result<GetBucketTaggingOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the bucket tag set.
    pub async fn put_bucket_tagging(
        &self,
        input: PutBucketTaggingInput,
    ) -> Result<PutBucketTaggingOutput, SdkError> {
        self.execute(input).await
    }

    /// Remove the bucket tag set.
    pub async fn delete_bucket_tagging(
        &self,
        input: DeleteBucketTaggingInput,
    ) -> Result<DeleteBucketTaggingOutput, SdkError> {
        self.execute(input).await
    }

    /// Bucket policy document.
    pub async fn get_bucket_policy(
        &self,
        input: GetBucketPolicyInput,
    ) -> Result<GetBucketPolicyOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the bucket policy.
    pub async fn put_bucket_policy(
        &self,
        input: PutBucketPolicyInput,
    ) -> Result<PutBucketPolicyOutput, SdkError> {
        self.execute(input).await
    }

    /// Remove the bucket policy.
    pub async fn delete_bucket_policy(
        &self,
        input: DeleteBucketPolicyInput,
    ) -> Result<DeleteBucketPolicyOutput, SdkError> {
        self.execute(input).await
    }

    /// Bucket CORS rules.
    pub async fn get_bucket_cors(&self, input: GetBucketCorsInput) -> Result<GetBucketCorsOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the bucket CORS rules.
    pub async fn put_bucket_cors(&self, input: PutBucketCorsInput) -> Result<PutBucketCorsOutput, SdkError> {
        self.execute(input).await
    }

    /// Remove the bucket CORS rules.
    pub async fn delete_bucket_cors(
        &self,
        input: DeleteBucketCorsInput,
    ) -> Result<DeleteBucketCorsOutput, SdkError> {
        self.execute(input).await
    }

    // --- Object operations ---

    /// Upload an object.
    pub async fn put_object(&self, input: PutObjectInput) -> Result<PutObjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Download an object.
    pub async fn get_object(&self, input: GetObjectInput) -> Result<GetObjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Object metadata without the body.
    pub async fn head_object(&self, input: HeadObjectInput) -> Result<HeadObjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Delete an object or object version.
    pub async fn delete_object(&self, input: DeleteObjectInput) -> Result<DeleteObjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Delete up to 1000 objects in one request.
    ///
    /// Per-key failures are reported in [`DeleteObjectsOutput::errors`].
    pub async fn delete_objects(
        &self,
        input: DeleteObjectsInput,
    ) -> Result<DeleteObjectsOutput, SdkError> {
        self.execute(input).await
    }

    /// Server-side copy.
    pub async fn copy_object(&self, input: CopyObjectInput) -> Result<CopyObjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Object access control list.
    pub async fn get_object_acl(&self, input: GetObjectAclInput) -> Result<GetObjectAclOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the object access control list.
    pub async fn put_object_acl(&self, input: PutObjectAclInput) -> Result<PutObjectAclOutput, SdkError> {
        self.execute(input).await
    }

    /// Object tag set.
    pub async fn get_object_tagging(
        &self,
        input: GetObjectTaggingInput,
    ) -> Result<GetObjectTaggingOutput, SdkError> {
        self.execute(input).await
    }

    /// Replace the object tag set.
    pub async fn put_object_tagging(
        &self,
        input: PutObjectTaggingInput,
    ) -> Result<PutObjectTaggingOutput, SdkError> {
        self.execute(input).await
    }

    /// Remove the object tag set.
    pub async fn delete_object_tagging(
        &self,
        input: DeleteObjectTaggingInput,
    ) -> Result<DeleteObjectTaggingOutput, SdkError> {
        self.execute(input).await
    }

    // --- Listing operations ---

    /// List objects (one page).
    pub async fn list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> Result<ListObjectsV2Output, SdkError> {
        self.execute(input).await
    }

    /// List object versions and delete markers (one page).
    pub async fn list_object_versions(
        &self,
        input: ListObjectVersionsInput,
    ) -> Result<ListObjectVersionsOutput, SdkError> {
        self.execute(input).await
    }

    // --- Multipart upload operations ---

    /// Start a multipart upload.
    pub async fn create_multipart_upload(
        &self,
        input: CreateMultipartUploadInput,
    ) -> Result<CreateMultipartUploadOutput, SdkError> {
        self.execute(input).await
    }

    /// Upload one part.
    pub async fn upload_part(&self, input: UploadPartInput) -> Result<UploadPartOutput, SdkError> {
        self.execute(input).await
    }

    /// Assemble uploaded parts into the final object.
    pub async fn complete_multipart_upload(
        &self,
        input: CompleteMultipartUploadInput,
    ) -> Result<CompleteMultipartUploadOutput, SdkError> {
        self.execute(input).await
    }

    /// Abort a multipart upload and discard its parts.
    pub async fn abort_multipart_upload(
        &self,
        input: AbortMultipartUploadInput,
    ) -> Result<AbortMultipartUploadOutput, SdkError> {
        self.execute(input).await
    }

    /// List uploaded parts (one page).
    pub async fn list_parts(&self, input: ListPartsInput) -> Result<ListPartsOutput, SdkError> {
        self.execute(input).await
    }

    /// List in-progress multipart uploads (one page).
    pub async fn list_multipart_uploads(
        &self,
        input: ListMultipartUploadsInput,
    ) -> Result<ListMultipartUploadsOutput, SdkError> {
        self.execute(input).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use ruststack_sdk_core::Credentials;
    use ruststack_sdk_runtime::StaticReplayTransport;
    use ruststack_sdk_s3_model::StreamingBlob;
    use ruststack_sdk_s3_model::types::{Delete, Tag, Tagging};

    use super::*;

    pub(crate) fn client(region: &str, transport: &Arc<StaticReplayTransport>) -> S3Client {
        let config = ClientConfig::builder()
            .region(region)
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .build();
        S3Client::with_transport(config, transport.clone()).unwrap()
    }

    #[test]
    fn test_should_fail_construction_for_unsupported_region() {
        let config = ClientConfig::builder().region("moon-base-1").build();
        let err = S3Client::with_transport(config, Arc::new(StaticReplayTransport::new()))
            .unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedRegion { service: "s3", .. }));
    }

    #[tokio::test]
    async fn test_should_not_send_invalid_input() {
        let transport = Arc::new(StaticReplayTransport::new());
        let client = client("us-west-2", &transport);

        let err = client
            .get_object(GetObjectInput {
                bucket: "my-bucket".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(err.is_local());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_send_dot_segment_keys_unresolved() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[], "");
        let client = client("us-west-2", &transport);

        client
            .put_object(PutObjectInput {
                bucket: "my-bucket".to_owned(),
                key: "photos/../secret.txt".to_owned(),
                body: StreamingBlob::new("x"),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.uri,
            "https://my-bucket.s3.us-west-2.amazonaws.com/photos/%2E%2E/secret.txt"
        );
        assert!(request.header("authorization").is_some());
    }

    #[tokio::test]
    async fn test_should_put_and_get_object() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[("etag", "\"5d41402abc4b2a76b9719d911017c592\"")], "");
        transport.push_response(
            200,
            &[("content-type", "text/plain"), ("content-length", "5")],
            "hello",
        );
        let client = client("us-west-2", &transport);

        let put = client
            .put_object(PutObjectInput {
                bucket: "my-bucket".to_owned(),
                key: "greeting.txt".to_owned(),
                body: StreamingBlob::new("hello"),
                content_type: Some("text/plain".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(put.e_tag.as_deref(), Some("\"5d41402abc4b2a76b9719d911017c592\""));

        let get = client
            .get_object(GetObjectInput {
                bucket: "my-bucket".to_owned(),
                key: "greeting.txt".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(get.body.data.as_ref(), b"hello");
        assert_eq!(get.metadata.content_type.as_deref(), Some("text/plain"));

        let requests = transport.requests();
        assert_eq!(requests[0].method, http::Method::PUT);
        assert_eq!(
            requests[0].uri,
            "https://my-bucket.s3.us-west-2.amazonaws.com/greeting.txt"
        );
        assert_eq!(requests[0].body_str(), "hello");
        assert!(requests[0].header("authorization").is_some());
        assert!(requests[0].header("x-amz-content-sha256").is_some());
        assert_eq!(requests[1].method, http::Method::GET);
    }

    #[tokio::test]
    async fn test_should_surface_service_errors() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(
            404,
            &[("x-amz-request-id", "REQ123")],
            "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>",
        );
        let client = client("us-west-2", &transport);

        let err = client
            .get_object(GetObjectInput {
                bucket: "my-bucket".to_owned(),
                key: "missing.txt".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        match err {
            SdkError::Service(service) => {
                assert_eq!(service.status, 404);
                assert_eq!(service.code, "NoSuchKey");
                assert_eq!(service.request_id.as_deref(), Some("REQ123"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_surface_transport_errors() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_error(ruststack_sdk_core::TransportError::Connect("refused".to_owned()));
        let client = client("us-west-2", &transport);

        let err = client
            .head_bucket(HeadBucketInput {
                bucket: "my-bucket".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
    }

    #[tokio::test]
    async fn test_should_add_location_constraint_outside_us_east_1() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[("location", "/my-bucket")], "");
        let client = client("eu-west-1", &transport);

        let output = client
            .create_bucket(CreateBucketInput {
                bucket: "my-bucket".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.location.as_deref(), Some("/my-bucket"));
        let body = transport.last_request().unwrap().body_str();
        assert!(body.contains("<LocationConstraint>eu-west-1</LocationConstraint>"));
    }

    #[tokio::test]
    async fn test_should_not_add_location_constraint_in_us_east_1() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[], "");
        let client = client("us-east-1", &transport);

        client
            .create_bucket(CreateBucketInput {
                bucket: "my-bucket".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.body.is_empty());
        assert_eq!(request.uri, "https://my-bucket.s3.amazonaws.com/");
    }

    #[tokio::test]
    async fn test_should_use_path_style_on_custom_endpoint() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[], "");
        let config = ClientConfig::builder()
            .region("us-east-1")
            .endpoint_url("http://localhost:4566")
            .build();
        let client = S3Client::with_transport(config, transport.clone()).unwrap();

        client
            .put_object_tagging(PutObjectTaggingInput {
                bucket: "my-bucket".to_owned(),
                key: "a/b.txt".to_owned(),
                tagging: Tagging::new([Tag::new("k", "v")]),
                ..Default::default()
            })
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.uri, "http://localhost:4566/my-bucket/a/b.txt?tagging");
        assert!(request.header("content-md5").is_some());
        assert!(request.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_should_report_per_key_delete_errors() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(
            200,
            &[],
            r"<DeleteResult>
                <Deleted><Key>a.txt</Key></Deleted>
                <Error><Key>b.txt</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>
            </DeleteResult>",
        );
        let client = client("us-west-2", &transport);

        let output = client
            .delete_objects(DeleteObjectsInput {
                bucket: "my-bucket".to_owned(),
                delete: Delete::keys(["a.txt", "b.txt"]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.deleted.len(), 1);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code.as_deref(), Some("AccessDenied"));
    }
}
