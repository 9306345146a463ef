//! Paginators over `ListCollections` and `ListFaces`.

use futures::stream::BoxStream;
use ruststack_sdk_core::SdkError;
use ruststack_sdk_rekognition_model::input::{ListCollectionsInput, ListFacesInput};
use ruststack_sdk_rekognition_model::output::{ListCollectionsOutput, ListFacesOutput};
use ruststack_sdk_rekognition_model::types::Face;
use ruststack_sdk_runtime::Paginator;

use crate::RekognitionClient;

impl RekognitionClient {
    /// Pages of `ListCollections`.
    pub fn list_collections_paginator(
        &self,
        input: ListCollectionsInput,
    ) -> Paginator<ListCollectionsOutput, SdkError> {
        let client = self.clone();
        let seed = input.next_token.clone();
        Paginator::new(seed, move |token| {
            let client = client.clone();
            let input = ListCollectionsInput {
                next_token: token,
                ..input.clone()
            };
            async move { client.list_collections(input).await }
        })
    }

    /// Every collection id across all pages.
    pub fn list_collections_items(
        &self,
        input: ListCollectionsInput,
    ) -> BoxStream<'static, Result<String, SdkError>> {
        self.list_collections_paginator(input)
            .into_items(|page| page.collection_ids)
    }

    /// Pages of `ListFaces`.
    pub fn list_faces_paginator(&self, input: ListFacesInput) -> Paginator<ListFacesOutput, SdkError> {
        let client = self.clone();
        let seed = input.next_token.clone();
        Paginator::new(seed, move |token| {
            let client = client.clone();
            let input = ListFacesInput {
                next_token: token,
                ..input.clone()
            };
            async move { client.list_faces(input).await }
        })
    }

    /// Every face in the collection across all pages.
    pub fn list_faces_items(&self, input: ListFacesInput) -> BoxStream<'static, Result<Face, SdkError>> {
        self.list_faces_paginator(input).into_items(|page| page.faces)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::{StreamExt, TryStreamExt};
    use ruststack_sdk_runtime::StaticReplayTransport;

    use super::*;
    use crate::client::tests::client;

    fn request_token(body: &[u8]) -> Option<String> {
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        json.get("NextToken").and_then(|t| t.as_str()).map(ToOwned::to_owned)
    }

    #[tokio::test]
    async fn test_should_list_collections_across_pages() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(
            200,
            &[],
            r#"{"CollectionIds":["a","b"],"FaceModelVersions":["7.0","7.0"],"NextToken":"page-2"}"#,
        );
        transport.push_response(200, &[], r#"{"CollectionIds":["c"],"FaceModelVersions":["6.0"]}"#);
        let client = client(&transport);

        let ids: Vec<String> = client
            .list_collections_items(ListCollectionsInput {
                max_results: Some(2),
                ..Default::default()
            })
            .try_collect()
            .await
            .unwrap();

        assert_eq!(ids, vec!["a", "b", "c"]);
        let requests = transport.requests();
        assert_eq!(request_token(&requests[0].body), None);
        assert_eq!(request_token(&requests[1].body).as_deref(), Some("page-2"));
        assert!(requests[1].body_str().contains("\"MaxResults\":2"));
    }

    #[tokio::test]
    async fn test_should_list_faces_and_stop_on_error() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(
            200,
            &[],
            r#"{"Faces":[{"FaceId":"11111111-2222-3333-4444-555555555555"}],"NextToken":"t1"}"#,
        );
        transport.push_response(
            400,
            &[],
            r#"{"__type":"InvalidPaginationTokenException","message":"bad token"}"#,
        );
        let client = client(&transport);

        let mut faces = client.list_faces_items(ListFacesInput {
            collection_id: "staff".to_owned(),
            ..Default::default()
        });

        let first = faces.next().await.unwrap().unwrap();
        assert_eq!(
            first.face_id.as_deref(),
            Some("11111111-2222-3333-4444-555555555555")
        );
        let err = faces.next().await.unwrap().unwrap_err();
        assert_eq!(err.code(), Some("InvalidPaginationTokenException"));
        assert!(faces.next().await.is_none());
    }

    #[tokio::test]
    async fn test_should_resume_from_seed_token() {
        let transport = Arc::new(StaticReplayTransport::new());
        transport.push_response(200, &[], r#"{"CollectionIds":["z"]}"#);
        let client = client(&transport);

        let pages = client
            .list_collections_paginator(ListCollectionsInput {
                next_token: Some("resume".to_owned()),
                ..Default::default()
            })
            .collect_pages()
            .await
            .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(
            request_token(&transport.requests()[0].body).as_deref(),
            Some("resume")
        );
    }
}
