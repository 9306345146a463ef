//! The Rekognition client.

use std::sync::Arc;

use ruststack_sdk_auth::SigningSettings;
use ruststack_sdk_core::{ClientConfig, Endpoint, SdkError, ServiceId};
#[allow(clippy::wildcard_imports)]
use ruststack_sdk_rekognition_model::input::*;
use ruststack_sdk_rekognition_model::OperationInput;
#[allow(clippy::wildcard_imports)]
use ruststack_sdk_rekognition_model::output::*;
use ruststack_sdk_runtime::{HttpTransport, ServiceClient};
use tracing::debug;

use crate::codec::{decode_response, encode_request};

/// Amazon Rekognition client.
///
/// # Examples
///
/// ```no_run
/// use ruststack_sdk_core::ClientConfig;
/// use ruststack_sdk_rekognition::RekognitionClient;
/// use ruststack_sdk_rekognition::input::DetectLabelsInput;
/// use ruststack_sdk_rekognition::types::Image;
///
/// # async fn run() -> Result<(), ruststack_sdk_core::SdkError> {
/// let client = RekognitionClient::new(ClientConfig::from_env())?;
/// let labels = client
///     .detect_labels(DetectLabelsInput {
///         image: Image::from_s3("photos", "cat.jpg"),
///         min_confidence: Some(80.0),
///         ..Default::default()
///     })
///     .await?;
/// println!("{:?}", labels.names_above(80.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RekognitionClient {
    pub(crate) inner: ServiceClient,
}

impl RekognitionClient {
    /// Create a client using the default HTTP transport.
    ///
    /// Fails with [`SdkError::UnsupportedRegion`] when Rekognition is not
    /// offered in the configured region.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        Ok(Self {
            inner: ServiceClient::new(ServiceId::Rekognition, config, SigningSettings::default())?,
        })
    }

    /// Create a client on top of an explicit transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            inner: ServiceClient::with_transport(
                ServiceId::Rekognition,
                config,
                SigningSettings::default(),
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

    /// Run any Rekognition operation.
    pub async fn execute<I: OperationInput>(&self, input: I) -> Result<I::Output, SdkError> {
        let request = encode_request(&input, self.inner.endpoint())?;
        let response = self.inner.send(I::OPERATION.as_str(), request).await?;
        decode_response(&response).inspect_err(|err| {
            debug!(operation = %I::OPERATION, error = %err, "operation failed");
        })
    }

    // --- Collections ---

    /// Create a face collection.
    pub async fn create_collection(
        &self,
        input: CreateCollectionInput,
    ) -> Result<CreateCollectionOutput, SdkError> {
        self.execute(input).await
    }

    /// Delete a collection and every face in it.
    pub async fn delete_collection(
        &self,
        input: DeleteCollectionInput,
    ) -> Result<DeleteCollectionOutput, SdkError> {
        self.execute(input).await
    }

    /// Face count, model version and creation time of a collection.
    pub async fn describe_collection(
        &self,
        input: DescribeCollectionInput,
    ) -> Result<DescribeCollectionOutput, SdkError> {
        self.execute(input).await
    }

    /// List collection ids (one page).
    pub async fn list_collections(
        &self,
        input: ListCollectionsInput,
    ) -> Result<ListCollectionsOutput, SdkError> {
        self.execute(input).await
    }

    // --- Faces in collections ---

    /// Detect faces in an image and add them to a collection.
    pub async fn index_faces(&self, input: IndexFacesInput) -> Result<IndexFacesOutput, SdkError> {
        self.execute(input).await
    }

    /// List faces stored in a collection (one page).
    pub async fn list_faces(&self, input: ListFacesInput) -> Result<ListFacesOutput, SdkError> {
        self.execute(input).await
    }

    /// Remove faces from a collection.
    pub async fn delete_faces(&self, input: DeleteFacesInput) -> Result<DeleteFacesOutput, SdkError> {
        self.execute(input).await
    }

    /// Find faces in a collection that match a stored face.
    pub async fn search_faces(&self, input: SearchFacesInput) -> Result<SearchFacesOutput, SdkError> {
        self.execute(input).await
    }

    /// Find faces in a collection that match the largest face in an image.
    pub async fn search_faces_by_image(
        &self,
        input: SearchFacesByImageInput,
    ) -> Result<SearchFacesByImageOutput, SdkError> {
        self.execute(input).await
    }

    // --- Image analysis ---

    /// Detect up to 100 of the largest faces in an image.
    pub async fn detect_faces(&self, input: DetectFacesInput) -> Result<DetectFacesOutput, SdkError> {
        self.execute(input).await
    }

    /// Detect objects, scenes and concepts.
    pub async fn detect_labels(
        &self,
        input: DetectLabelsInput,
    ) -> Result<DetectLabelsOutput, SdkError> {
        self.execute(input).await
    }

    /// Recognize celebrities in an image.
    pub async fn recognize_celebrities(
        &self,
        input: RecognizeCelebritiesInput,
    ) -> Result<RecognizeCelebritiesOutput, SdkError> {
        self.execute(input).await
    }

    /// Name and links for a celebrity id.
    pub async fn get_celebrity_info(
        &self,
        input: GetCelebrityInfoInput,
    ) -> Result<GetCelebrityInfoOutput, SdkError> {
        self.execute(input).await
    }

    // --- Custom labels projects ---

    /// Create a Custom Labels project.
    pub async fn create_project(
        &self,
        input: CreateProjectInput,
    ) -> Result<CreateProjectOutput, SdkError> {
        self.execute(input).await
    }

    /// Delete a Custom Labels project.
    pub async fn delete_project(
        &self,
        input: DeleteProjectInput,
    ) -> Result<DeleteProjectOutput, SdkError> {
        self.execute(input).await
    }
}
