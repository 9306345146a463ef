//! Listing and pagination integration tests.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use ruststack_sdk_s3::StreamingBlob;
    use ruststack_sdk_s3::input::{ListObjectsV2Input, PutObjectInput};

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    async fn seed(client: &ruststack_sdk_s3::S3Client, bucket: &str, keys: &[&str]) {
        for key in keys {
            client
                .put_object(PutObjectInput {
                    bucket: bucket.to_owned(),
                    key: (*key).to_owned(),
                    body: StreamingBlob::new(key.as_bytes().to_vec()),
                    ..Default::default()
                })
                .await
                .expect("put_object");
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_paginate_list_objects_v2() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "paginate").await;
        seed(&client, &bucket, &["k1", "k2", "k3", "k4", "k5"]).await;

        let pages = client
            .list_objects_v2_paginator(ListObjectsV2Input {
                bucket: bucket.clone(),
                max_keys: Some(2),
                ..Default::default()
            })
            .collect_pages()
            .await
            .expect("list_objects_v2");

        assert_eq!(pages.len(), 3);
        let keys: Vec<String> = pages
            .into_iter()
            .flat_map(|p| p.contents)
            .filter_map(|o| o.key)
            .collect();
        assert_eq!(keys, vec!["k1", "k2", "k3", "k4", "k5"]);

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_group_common_prefixes() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "prefixes").await;
        seed(&client, &bucket, &["photos/2023/a.jpg", "photos/2024/b.jpg", "readme"]).await;

        let output = client
            .list_objects_v2(ListObjectsV2Input {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                prefix: Some("photos/".to_owned()),
                ..Default::default()
            })
            .await
            .expect("list_objects_v2");

        let prefixes: Vec<String> = output
            .common_prefixes
            .into_iter()
            .filter_map(|p| p.prefix)
            .collect();
        assert_eq!(prefixes, vec!["photos/2023/", "photos/2024/"]);
        assert!(output.contents.is_empty());

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_stream_items_with_prefix() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "items").await;
        seed(&client, &bucket, &["logs/1", "logs/2", "logs/3", "other"]).await;

        let sizes: Vec<i64> = client
            .list_objects_v2_items(ListObjectsV2Input {
                bucket: bucket.clone(),
                prefix: Some("logs/".to_owned()),
                max_keys: Some(1),
                ..Default::default()
            })
            .map_ok(|o| o.size.unwrap_or_default())
            .try_collect()
            .await
            .expect("list_objects_v2");

        assert_eq!(sizes, vec![6, 6, 6]);

        cleanup_bucket(&client, &bucket).await;
    }
}
