//! Object CRUD, copy, tagging and batch delete integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ruststack_sdk_s3::StreamingBlob;
    use ruststack_sdk_s3::input::{
        CopyObjectInput, DeleteObjectInput, DeleteObjectsInput, GetObjectInput,
        GetObjectTaggingInput, HeadObjectInput, PutObjectInput, PutObjectTaggingInput,
    };
    use ruststack_sdk_s3::types::{Delete, Tag, Tagging};

    use crate::{cleanup_bucket, create_test_bucket, reference_s3_client, s3_client};

    fn put(bucket: &str, key: &str, body: &'static str) -> PutObjectInput {
        PutObjectInput {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            body: StreamingBlob::new(body),
            compute_content_md5: true,
            ..Default::default()
        }
    }

    fn get(bucket: &str, key: &str) -> GetObjectInput {
        GetObjectInput {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_put_get_head_delete_object() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "object").await;

        let mut input = put(&bucket, "docs/hello world.txt", "hello");
        input.content_type = Some("text/plain".to_owned());
        input.metadata = HashMap::from([("owner".to_owned(), "alice".to_owned())]);
        let put_output = client.put_object(input).await.expect("put_object");
        assert!(put_output.e_tag.is_some());

        let output = client
            .get_object(get(&bucket, "docs/hello world.txt"))
            .await
            .expect("get_object");
        assert_eq!(output.body.into_bytes().as_ref(), b"hello");
        assert_eq!(output.metadata.content_type.as_deref(), Some("text/plain"));
        assert_eq!(
            output.metadata.metadata.get("owner").map(String::as_str),
            Some("alice")
        );

        let head = client
            .head_object(HeadObjectInput {
                bucket: bucket.clone(),
                key: "docs/hello world.txt".to_owned(),
                ..Default::default()
            })
            .await
            .expect("head_object");
        assert_eq!(head.metadata.content_length, Some(5));
        assert_eq!(head.metadata.e_tag, put_output.e_tag);

        client
            .delete_object(DeleteObjectInput {
                bucket: bucket.clone(),
                key: "docs/hello world.txt".to_owned(),
                ..Default::default()
            })
            .await
            .expect("delete_object");

        let err = client
            .get_object(get(&bucket, "docs/hello world.txt"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("NoSuchKey"));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_interoperate_with_reference_client() {
        let client = s3_client();
        let reference = reference_s3_client();
        let bucket = create_test_bucket(&client, "interop").await;

        client
            .put_object(put(&bucket, "from-sdk", "written by sdk"))
            .await
            .expect("put_object");
        let body = reference
            .get_object()
            .bucket(&bucket)
            .key("from-sdk")
            .send()
            .await
            .expect("reference get_object")
            .body
            .collect()
            .await
            .expect("collect body")
            .into_bytes();
        assert_eq!(body.as_ref(), b"written by sdk");

        reference
            .put_object()
            .bucket(&bucket)
            .key("from-reference")
            .body(aws_sdk_s3::primitives::ByteStream::from_static(b"written by reference"))
            .send()
            .await
            .expect("reference put_object");
        let output = client
            .get_object(get(&bucket, "from-reference"))
            .await
            .expect("get_object");
        assert_eq!(output.body.into_bytes().as_ref(), b"written by reference");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_copy_object_with_special_characters() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "copy").await;
        client
            .put_object(put(&bucket, "src/a b+c.txt", "copy me"))
            .await
            .expect("put_object");

        let output = client
            .copy_object(CopyObjectInput {
                bucket: bucket.clone(),
                key: "dst/copied.txt".to_owned(),
                copy_source: format!("{bucket}/src/a b+c.txt"),
                ..Default::default()
            })
            .await
            .expect("copy_object");
        assert!(output.copy_object_result.is_some());

        let copied = client
            .get_object(get(&bucket, "dst/copied.txt"))
            .await
            .expect("get_object");
        assert_eq!(copied.body.into_bytes().as_ref(), b"copy me");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_put_and_get_object_tagging() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "tagging").await;
        client
            .put_object(put(&bucket, "tagged", "x"))
            .await
            .expect("put_object");

        client
            .put_object_tagging(PutObjectTaggingInput {
                bucket: bucket.clone(),
                key: "tagged".to_owned(),
                tagging: Tagging::new([Tag::new("env", "test"), Tag::new("team", "storage")]),
                ..Default::default()
            })
            .await
            .expect("put_object_tagging");

        let output = client
            .get_object_tagging(GetObjectTaggingInput {
                bucket: bucket.clone(),
                key: "tagged".to_owned(),
                ..Default::default()
            })
            .await
            .expect("get_object_tagging");
        let mut tags: Vec<(String, String)> =
            output.tag_set.into_iter().map(|t| (t.key, t.value)).collect();
        tags.sort();
        assert_eq!(
            tags,
            vec![
                ("env".to_owned(), "test".to_owned()),
                ("team".to_owned(), "storage".to_owned())
            ]
        );

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_objects_in_batch() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "batch").await;
        for key in ["a", "b", "c"] {
            client
                .put_object(put(&bucket, key, "x"))
                .await
                .expect("put_object");
        }

        let output = client
            .delete_objects(DeleteObjectsInput {
                bucket: bucket.clone(),
                delete: Delete::keys(["a", "b", "c"]),
                ..Default::default()
            })
            .await
            .expect("delete_objects");

        assert_eq!(output.deleted.len(), 3);
        assert!(output.errors.is_empty());

        cleanup_bucket(&client, &bucket).await;
    }
}
