//! Integration tests for the RustStack SDK clients.
//!
//! The S3 tests require an S3-compatible server at `localhost:4566`
//! (override with `S3_ENDPOINT_URL`). Rekognition tests talk to AWS and need
//! real credentials in the environment. Everything is marked `#[ignore]` so
//! it does not run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-sdk-integration -- --ignored
//! ```

use std::sync::Once;

use futures::TryStreamExt;
use ruststack_sdk_s3::input::{
    AbortMultipartUploadInput, CreateBucketInput, DeleteBucketInput, DeleteObjectsInput,
    ListMultipartUploadsInput, ListObjectVersionsInput,
};
use ruststack_sdk_s3::types::{Delete, ObjectIdentifier};
use ruststack_sdk_s3::{ClientConfig, Credentials, S3Client};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("S3_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Client configuration pointing at the local server.
#[must_use]
pub fn local_config() -> ClientConfig {
    ClientConfig::builder()
        .region("us-east-1")
        .endpoint_url(endpoint_url())
        .credentials(Credentials::new("test", "test"))
        .force_path_style(true)
        .build()
}

/// Create an SDK S3 client pointing at the local server.
#[must_use]
pub fn s3_client() -> S3Client {
    init_tracing();
    S3Client::new(local_config()).expect("custom endpoint should always resolve")
}

/// Create an `aws-sdk-s3` client used to cross-check what the SDK client wrote.
#[must_use]
pub fn reference_s3_client() -> aws_sdk_s3::Client {
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    init_tracing();

    let creds = Credentials::new("test", "test", None, None, "integration-test");

    let config = aws_sdk_s3::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(creds)
        .endpoint_url(endpoint_url())
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(config)
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket and return its name. Caller is responsible for cleanup.
pub async fn create_test_bucket(client: &S3Client, prefix: &str) -> String {
    let name = test_bucket_name(prefix);
    client
        .create_bucket(CreateBucketInput {
            bucket: name.clone(),
            ..Default::default()
        })
        .await
        .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    name
}

/// Delete every object version and pending upload in a bucket, then the bucket.
pub async fn cleanup_bucket(client: &S3Client, bucket: &str) {
    // Versions cover unversioned buckets too (version id "null").
    let versions: Vec<_> = match client
        .list_object_versions_paginator(ListObjectVersionsInput {
            bucket: bucket.to_owned(),
            ..Default::default()
        })
        .collect_pages()
        .await
    {
        Ok(pages) => pages,
        Err(_) => return, // Bucket may not exist.
    };

    let mut identifiers = Vec::new();
    for page in versions {
        for v in page.versions {
            if let Some(key) = v.key {
                identifiers.push(ObjectIdentifier {
                    key,
                    version_id: v.version_id,
                });
            }
        }
        for m in page.delete_markers {
            if let Some(key) = m.key {
                identifiers.push(ObjectIdentifier {
                    key,
                    version_id: m.version_id,
                });
            }
        }
    }
    for chunk in identifiers.chunks(ruststack_sdk_s3::input::MAX_DELETE_OBJECTS) {
        let _ = client
            .delete_objects(DeleteObjectsInput {
                bucket: bucket.to_owned(),
                delete: Delete {
                    objects: chunk.to_vec(),
                    quiet: Some(true),
                },
                ..Default::default()
            })
            .await;
    }

    let uploads: Vec<_> = client
        .list_multipart_uploads_items(ListMultipartUploadsInput {
            bucket: bucket.to_owned(),
            ..Default::default()
        })
        .try_collect()
        .await
        .unwrap_or_default();
    for upload in uploads {
        if let (Some(key), Some(upload_id)) = (upload.key, upload.upload_id) {
            let _ = client
                .abort_multipart_upload(AbortMultipartUploadInput {
                    bucket: bucket.to_owned(),
                    key,
                    upload_id,
                    ..Default::default()
                })
                .await;
        }
    }

    let _ = client
        .delete_bucket(DeleteBucketInput {
            bucket: bucket.to_owned(),
            ..Default::default()
        })
        .await;
}

mod test_bucket;
mod test_error;
mod test_list;
mod test_multipart;
mod test_object;
mod test_presign;
mod test_rekognition;
mod test_versioning;
