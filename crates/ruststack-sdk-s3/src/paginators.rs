//! Paginators over the S3 listing operations.
//!
//! Each `*_paginator` method takes the first-page input and returns a
//! [`Paginator`] stream of pages; the matching `*_items` method flattens the
//! pages into their listed entries.

use futures::stream::BoxStream;
use ruststack_sdk_core::SdkError;
use ruststack_sdk_runtime::Paginator;
use ruststack_sdk_s3_model::input::{
    ListBucketsInput, ListMultipartUploadsInput, ListObjectVersionsInput, ListObjectsV2Input,
    ListPartsInput,
};
use ruststack_sdk_s3_model::output::{
    ListBucketsOutput, ListMultipartUploadsOutput, ListObjectVersionsOutput, ListObjectsV2Output,
    ListPartsOutput,
};
use ruststack_sdk_s3_model::types::{Bucket, MultipartUpload, Object, ObjectVersion, Part};

use crate::S3Client;

impl S3Client {
    /// Pages of `ListBuckets`.
    pub fn list_buckets_paginator(
        &self,
        input: ListBucketsInput,
    ) -> Paginator<ListBucketsOutput, SdkError> {
        let client = self.clone();
        let seed = input.continuation_token.clone();
        Paginator::new(seed, move |token| {
            let client = client.clone();
            let input = ListBucketsInput {
                continuation_token: token,
                ..input.clone()
            };
            async move { client.list_buckets(input).await }
        })
    }

    /// Every bucket across all `ListBuckets` pages.
    pub fn list_buckets_items(
        &self,
        input: ListBucketsInput,
    ) -> BoxStream<'static, Result<Bucket, SdkError>> {
        self.list_buckets_paginator(input)
            .into_items(|page| page.buckets)
    }

    /// Pages of `ListObjectsV2`.
    pub fn list_objects_v2_paginator(
        &self,
        input: ListObjectsV2Input,
    ) -> Paginator<ListObjectsV2Output, SdkError> {
        let client = self.clone();
        let seed = input.continuation_token.clone();
        Paginator::new(seed, move |token| {
            let client = client.clone();
            let input = ListObjectsV2Input {
                continuation_token: token,
                ..input.clone()
            };
            async move { client.list_objects_v2(input).await }
        })
    }

    /// Every object across all `ListObjectsV2` pages.
    pub fn list_objects_v2_items(
        &self,
        input: ListObjectsV2Input,
    ) -> BoxStream<'static, Result<Object, SdkError>> {
        self.list_objects_v2_paginator(input)
            .into_items(|page| page.contents)
    }

    /// Pages of `ListObjectVersions`, following the key and version id markers.
    pub fn list_object_versions_paginator(
        &self,
        input: ListObjectVersionsInput,
    ) -> Paginator<ListObjectVersionsOutput, SdkError> {
        let client = self.clone();
        let seed = input
            .key_marker
            .clone()
            .map(|key| (key, input.version_id_marker.clone()));
        Paginator::new(seed, move |token: Option<(String, Option<String>)>| {
            let client = client.clone();
            let (key_marker, version_id_marker) = match token {
                Some((key, version)) => (Some(key), version),
                None => (None, None),
            };
            let input = ListObjectVersionsInput {
                key_marker,
                version_id_marker,
                ..input.clone()
            };
            async move { client.list_object_versions(input).await }
        })
    }

    /// Every object version across all `ListObjectVersions` pages.
    ///
    /// Delete markers are not included; use the page paginator for those.
    pub fn list_object_versions_items(
        &self,
        input: ListObjectVersionsInput,
    ) -> BoxStream<'static, Result<ObjectVersion, SdkError>> {
        self.list_object_versions_paginator(input)
            .into_items(|page| page.versions)
    }

    /// Pages of `ListParts`.
    pub fn list_parts_paginator(&self, input: ListPartsInput) -> Paginator<ListPartsOutput, SdkError> {
        let client = self.clone();
        let seed = input.part_number_marker.clone();
        Paginator::new(seed, move |token| {
            let client = client.clone();
            let input = ListPartsInput {
                part_number_marker: token,
                ..input.clone()
            };
            async move { client.list_parts(input).await }
        })
    }

    /// Every part across all `ListParts` pages.
    pub fn list_parts_items(
        &self,
        input: ListPartsInput,
    ) -> BoxStream<'static, Result<Part, SdkError>> {
        self.list_parts_paginator(input).into_items(|page| page.parts)
    }

    /// Pages of `ListMultipartUploads`, following the key and upload id markers.
    pub fn list_multipart_uploads_paginator(
        &self,
        input: ListMultipartUploadsInput,
    ) -> Paginator<ListMultipartUploadsOutput, SdkError> {
        let client = self.clone();
        let seed = input
            .key_marker
            .clone()
            .map(|key| (key, input.upload_id_marker.clone()));
        Paginator::new(seed, move |token: Option<(String, Option<String>)>| {
            let client = client.clone();
            let (key_marker, upload_id_marker) = match token {
                Some((key, upload)) => (Some(key), upload),
                None => (None, None),
            };
            let input = ListMultipartUploadsInput {
                key_marker,
                upload_id_marker,
                ..input.clone()
            };
            async move { client.list_multipart_uploads(input).await }
        })
    }

    /// Every in-progress upload across all `ListMultipartUploads` pages.
    pub fn list_multipart_uploads_items(
        &self,
        input: ListMultipartUploadsInput,
    ) -> BoxStream<'static, Result<MultipartUpload, SdkError>> {
        self.list_multipart_uploads_paginator(input)
            .into_items(|page| page.uploads)
    }
}
