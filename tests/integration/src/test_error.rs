//! Error mapping integration tests.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ruststack_sdk_s3::input::{
        CreateBucketInput, DeleteBucketInput, GetObjectInput, HeadObjectInput, PutObjectInput,
    };
    use ruststack_sdk_s3::{ClientConfig, S3Client, SdkError, StreamingBlob};

    use crate::{cleanup_bucket, create_test_bucket, local_config, s3_client, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_map_no_such_bucket() {
        let client = s3_client();

        let err = client
            .get_object(GetObjectInput {
                bucket: test_bucket_name("missing"),
                key: "k".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("NoSuchBucket"));
        let SdkError::Service(service) = err else {
            panic!("expected service error");
        };
        assert!(service.request_id.is_some() || service.message.is_some());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_map_head_not_found_without_body() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "head404").await;

        let err = client
            .head_object(HeadObjectInput {
                bucket: bucket.clone(),
                key: "absent".to_owned(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("NotFound"));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_deleting_non_empty_bucket() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "nonempty").await;
        client
            .put_object(PutObjectInput {
                bucket: bucket.clone(),
                key: "keep".to_owned(),
                body: StreamingBlob::new("x"),
                ..Default::default()
            })
            .await
            .expect("put_object");

        let err = client
            .delete_bucket(DeleteBucketInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("BucketNotEmpty"));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    async fn test_should_fail_locally_on_invalid_bucket_name() {
        let client = s3_client();

        let err = client
            .create_bucket(CreateBucketInput::default())
            .await
            .unwrap_err();

        assert!(err.is_local());
        assert!(matches!(err, SdkError::Validation { operation: "CreateBucket", .. }));
    }

    #[tokio::test]
    async fn test_should_refuse_presign_without_credentials() {
        let config = ClientConfig {
            credentials: None,
            ..local_config()
        };
        let client = S3Client::new(config).expect("client");

        let err = client
            .presign_get_object(
                GetObjectInput {
                    bucket: "bucket".to_owned(),
                    key: "key".to_owned(),
                    ..Default::default()
                },
                Duration::from_secs(60),
            )
            .unwrap_err();
        assert!(matches!(err, SdkError::Signing(_)));
    }
}
