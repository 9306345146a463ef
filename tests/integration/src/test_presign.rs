//! Presigned URL integration tests.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ruststack_sdk_s3::StreamingBlob;
    use ruststack_sdk_s3::input::{GetObjectInput, PutObjectInput};

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_download_with_presigned_url() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "presign-get").await;
        client
            .put_object(PutObjectInput {
                bucket: bucket.clone(),
                key: "shared/report.txt".to_owned(),
                body: StreamingBlob::new("quarterly numbers"),
                ..Default::default()
            })
            .await
            .expect("put_object");

        let url = client
            .presign_get_object(
                GetObjectInput {
                    bucket: bucket.clone(),
                    key: "shared/report.txt".to_owned(),
                    ..Default::default()
                },
                Duration::from_secs(300),
            )
            .expect("presign");
        assert!(url.contains("X-Amz-Signature="));

        let response = reqwest::get(&url).await.expect("fetch presigned url");
        assert!(response.status().is_success());
        assert_eq!(response.text().await.expect("body"), "quarterly numbers");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_upload_with_presigned_url() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "presign-put").await;

        let url = client
            .presign_put_object(
                PutObjectInput {
                    bucket: bucket.clone(),
                    key: "inbox/upload.bin".to_owned(),
                    ..Default::default()
                },
                Duration::from_secs(300),
            )
            .expect("presign");

        let response = reqwest::Client::new()
            .put(&url)
            .body("uploaded through url")
            .send()
            .await
            .expect("put presigned url");
        assert!(response.status().is_success());

        let output = client
            .get_object(GetObjectInput {
                bucket: bucket.clone(),
                key: "inbox/upload.bin".to_owned(),
                ..Default::default()
            })
            .await
            .expect("get_object");
        assert_eq!(output.body.into_bytes().as_ref(), b"uploaded through url");

        cleanup_bucket(&client, &bucket).await;
    }
}
