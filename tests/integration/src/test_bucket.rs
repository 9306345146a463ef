//! Bucket lifecycle, listing and waiter integration tests.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::TryStreamExt;
    use ruststack_sdk_s3::input::{GetBucketLocationInput, HeadBucketInput, ListBucketsInput};
    use ruststack_sdk_s3::{DEFAULT_WAITER_CONFIG, WaiterConfig};

    use crate::{cleanup_bucket, create_test_bucket, reference_s3_client, s3_client};

    fn head(bucket: &str) -> HeadBucketInput {
        HeadBucketInput {
            bucket: bucket.to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_and_delete_bucket() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "create").await;

        assert!(client.head_bucket(head(&bucket)).await.is_ok());
        let reference = reference_s3_client();
        assert!(reference.head_bucket().bucket(&bucket).send().await.is_ok());

        cleanup_bucket(&client, &bucket).await;

        let err = client.head_bucket(head(&bucket)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_buckets_with_paginator() {
        let client = s3_client();
        let b1 = create_test_bucket(&client, "list1").await;
        let b2 = create_test_bucket(&client, "list2").await;

        let names: Vec<String> = client
            .list_buckets_items(ListBucketsInput::default())
            .map_ok(|b| b.name.unwrap_or_default())
            .try_collect()
            .await
            .expect("list_buckets");

        assert!(names.contains(&b1), "should contain {b1}");
        assert!(names.contains(&b2), "should contain {b2}");

        cleanup_bucket(&client, &b1).await;
        cleanup_bucket(&client, &b2).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_us_east_1_location() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "location").await;

        let output = client
            .get_bucket_location(GetBucketLocationInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .await
            .expect("get_bucket_location");
        assert_eq!(output.region(), "us-east-1");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_wait_for_bucket_existence() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "waiter").await;
        let config = WaiterConfig::new(Duration::from_millis(200), Duration::from_secs(5));

        client
            .bucket_exists_waiter(head(&bucket))
            .with_config(config)
            .wait()
            .await
            .expect("bucket should exist");

        cleanup_bucket(&client, &bucket).await;

        client
            .bucket_not_exists_waiter(head(&bucket))
            .with_config(config)
            .wait()
            .await
            .expect("bucket should be gone");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_time_out_waiting_for_missing_bucket() {
        let client = s3_client();
        let config = WaiterConfig::new(Duration::from_millis(100), Duration::from_millis(350));
        assert!(config.timeout < DEFAULT_WAITER_CONFIG.timeout);

        let err = client
            .bucket_exists_waiter(head(&crate::test_bucket_name("never")))
            .with_config(config)
            .wait()
            .await
            .unwrap_err();

        assert!(matches!(err, ruststack_sdk_s3::SdkError::WaiterTimeout { .. }));
    }
}
