//! Bucket versioning integration tests.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use ruststack_sdk_s3::StreamingBlob;
    use ruststack_sdk_s3::input::{
        DeleteObjectInput, GetBucketVersioningInput, GetObjectInput, ListObjectVersionsInput,
        PutBucketVersioningInput, PutObjectInput,
    };
    use ruststack_sdk_s3::types::{BucketVersioningStatus, VersioningConfiguration};

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    async fn enable_versioning(client: &ruststack_sdk_s3::S3Client, bucket: &str) {
        client
            .put_bucket_versioning(PutBucketVersioningInput {
                bucket: bucket.to_owned(),
                versioning_configuration: VersioningConfiguration {
                    status: Some(BucketVersioningStatus::Enabled),
                    mfa_delete: None,
                },
                ..Default::default()
            })
            .await
            .expect("put_bucket_versioning");
    }

    async fn put_version(client: &ruststack_sdk_s3::S3Client, bucket: &str, body: &'static str) -> String {
        client
            .put_object(PutObjectInput {
                bucket: bucket.to_owned(),
                key: "doc".to_owned(),
                body: StreamingBlob::new(body),
                ..Default::default()
            })
            .await
            .expect("put_object")
            .version_id
            .expect("version id")
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_enable_versioning() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "versioning").await;

        let before = client
            .get_bucket_versioning(GetBucketVersioningInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .await
            .expect("get_bucket_versioning");
        assert_eq!(before.status, None);

        enable_versioning(&client, &bucket).await;

        let after = client
            .get_bucket_versioning(GetBucketVersioningInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .await
            .expect("get_bucket_versioning");
        assert_eq!(after.status, Some(BucketVersioningStatus::Enabled));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_keep_and_read_old_versions() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "versions").await;
        enable_versioning(&client, &bucket).await;

        let v1 = put_version(&client, &bucket, "first").await;
        let v2 = put_version(&client, &bucket, "second").await;
        assert_ne!(v1, v2);

        let versions: Vec<_> = client
            .list_object_versions_items(ListObjectVersionsInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .try_collect()
            .await
            .expect("list_object_versions");
        assert_eq!(versions.len(), 2);
        let latest = versions
            .iter()
            .find(|v| v.is_latest == Some(true))
            .expect("latest version");
        assert_eq!(latest.version_id.as_deref(), Some(v2.as_str()));

        let old = client
            .get_object(GetObjectInput {
                bucket: bucket.clone(),
                key: "doc".to_owned(),
                version_id: Some(v1),
                ..Default::default()
            })
            .await
            .expect("get_object");
        assert_eq!(old.body.into_bytes().as_ref(), b"first");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_delete_marker() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "marker").await;
        enable_versioning(&client, &bucket).await;
        put_version(&client, &bucket, "data").await;

        let output = client
            .delete_object(DeleteObjectInput {
                bucket: bucket.clone(),
                key: "doc".to_owned(),
                ..Default::default()
            })
            .await
            .expect("delete_object");
        assert_eq!(output.delete_marker, Some(true));

        let pages = client
            .list_object_versions_paginator(ListObjectVersionsInput {
                bucket: bucket.clone(),
                ..Default::default()
            })
            .collect_pages()
            .await
            .expect("list_object_versions");
        let markers: usize = pages.iter().map(|p| p.delete_markers.len()).sum();
        assert_eq!(markers, 1);

        cleanup_bucket(&client, &bucket).await;
    }
}
