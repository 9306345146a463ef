//! Rekognition integration tests against AWS.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use ruststack_sdk_rekognition::input::{
        CreateCollectionInput, DeleteCollectionInput, DescribeCollectionInput, ListCollectionsInput,
    };
    use ruststack_sdk_rekognition::{ClientConfig, RekognitionClient};

    fn client() -> RekognitionClient {
        let config = ClientConfig::from_env();
        assert!(config.credentials.is_some(), "AWS credentials must be set");
        RekognitionClient::new(config).expect("region should offer Rekognition")
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_should_manage_collection_lifecycle() {
        let client = client();
        let collection_id = crate::test_bucket_name("faces");

        let created = client
            .create_collection(CreateCollectionInput {
                collection_id: collection_id.clone(),
                ..Default::default()
            })
            .await
            .expect("create_collection");
        assert_eq!(created.status_code, Some(200));

        let described = client
            .describe_collection(DescribeCollectionInput {
                collection_id: collection_id.clone(),
            })
            .await
            .expect("describe_collection");
        assert_eq!(described.face_count, Some(0));

        let ids: Vec<String> = client
            .list_collections_items(ListCollectionsInput::default())
            .try_collect()
            .await
            .expect("list_collections");
        assert!(ids.contains(&collection_id));

        client
            .delete_collection(DeleteCollectionInput {
                collection_id: collection_id.clone(),
            })
            .await
            .expect("delete_collection");

        let err = client
            .describe_collection(DescribeCollectionInput { collection_id })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
    }
}
