//! Multipart upload integration tests.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use ruststack_sdk_s3::StreamingBlob;
    use ruststack_sdk_s3::input::{
        AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
        GetObjectInput, ListPartsInput, UploadPartInput,
    };
    use ruststack_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    /// Smallest size S3 accepts for any part but the last.
    const MIN_PART_SIZE: usize = 5 * 1024 * 1024;

    async fn start(client: &ruststack_sdk_s3::S3Client, bucket: &str, key: &str) -> String {
        client
            .create_multipart_upload(CreateMultipartUploadInput {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                ..Default::default()
            })
            .await
            .expect("create_multipart_upload")
            .upload_id
            .expect("upload id")
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_complete_multipart_upload() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "multipart").await;
        let upload_id = start(&client, &bucket, "big.bin").await;

        let bodies = [vec![b'a'; MIN_PART_SIZE], b"tail".to_vec()];
        let mut completed = Vec::new();
        for (idx, body) in bodies.into_iter().enumerate() {
            let part_number = i32::try_from(idx + 1).expect("part number");
            let output = client
                .upload_part(UploadPartInput {
                    bucket: bucket.clone(),
                    key: "big.bin".to_owned(),
                    upload_id: upload_id.clone(),
                    part_number,
                    body: StreamingBlob::new(body),
                    ..Default::default()
                })
                .await
                .expect("upload_part");
            completed.push(CompletedPart::new(part_number, output.e_tag.expect("etag")));
        }

        let parts: Vec<_> = client
            .list_parts_items(ListPartsInput {
                bucket: bucket.clone(),
                key: "big.bin".to_owned(),
                upload_id: upload_id.clone(),
                ..Default::default()
            })
            .try_collect()
            .await
            .expect("list_parts");
        assert_eq!(parts.len(), 2);

        let output = client
            .complete_multipart_upload(CompleteMultipartUploadInput {
                bucket: bucket.clone(),
                key: "big.bin".to_owned(),
                upload_id,
                multipart_upload: CompletedMultipartUpload { parts: completed },
                ..Default::default()
            })
            .await
            .expect("complete_multipart_upload");
        assert!(output.e_tag.is_some_and(|e| e.contains("-2")));

        let object = client
            .get_object(GetObjectInput {
                bucket: bucket.clone(),
                key: "big.bin".to_owned(),
                ..Default::default()
            })
            .await
            .expect("get_object");
        assert_eq!(object.body.len(), MIN_PART_SIZE + 4);

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_abort_multipart_upload() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "abort").await;
        let upload_id = start(&client, &bucket, "partial").await;

        client
            .abort_multipart_upload(AbortMultipartUploadInput {
                bucket: bucket.clone(),
                key: "partial".to_owned(),
                upload_id: upload_id.clone(),
                ..Default::default()
            })
            .await
            .expect("abort_multipart_upload");

        let err = client
            .list_parts(ListPartsInput {
                bucket: bucket.clone(),
                key: "partial".to_owned(),
                upload_id,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("NoSuchUpload"));

        cleanup_bucket(&client, &bucket).await;
    }
}
