//! Rekognition operation outputs.
//!
//! Every output decodes from the JSON response body with every member
//! optional, so an empty `{}` body yields `Default`.

use chrono::{DateTime, Utc};
use ruststack_sdk_core::PageableResponse;
use serde::{Deserialize, Serialize};

use crate::types::{
    BoundingBox, Celebrity, ComparedFace, Face, FaceDetail, FaceMatch, FaceRecord, KnownGender,
    Label, OrientationCorrection, ProjectStatus, UnindexedFace, UnsuccessfulFaceDeletion,
};

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Timestamps are sent as fractional epoch seconds.
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option, clippy::cast_precision_loss)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        #[allow(clippy::cast_possible_truncation)]
        let millis = (secs * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp {secs} out of range")))
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateCollectionOutput {
    /// HTTP status code reported by the service (200 on success).
    pub status_code: Option<i32>,
    pub collection_arn: Option<String>,
    pub face_model_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteCollectionOutput {
    pub status_code: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCollectionOutput {
    pub face_count: Option<i64>,
    pub face_model_version: Option<String>,
    #[serde(rename = "CollectionARN")]
    pub collection_arn: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub user_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCollectionsOutput {
    pub collection_ids: Vec<String>,
    pub next_token: Option<String>,
    /// Face model version of each collection, in `collection_ids` order.
    pub face_model_versions: Vec<String>,
}

impl PageableResponse for ListCollectionsOutput {
    type Token = String;

    fn next_token(&self) -> Option<String> {
        non_empty(self.next_token.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Faces in collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IndexFacesOutput {
    pub face_records: Vec<FaceRecord>,
    pub orientation_correction: Option<OrientationCorrection>,
    pub face_model_version: Option<String>,
    /// Faces detected but not indexed, with the reasons.
    pub unindexed_faces: Vec<UnindexedFace>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListFacesOutput {
    pub faces: Vec<Face>,
    pub next_token: Option<String>,
    pub face_model_version: Option<String>,
}

impl PageableResponse for ListFacesOutput {
    type Token = String;

    fn next_token(&self) -> Option<String> {
        non_empty(self.next_token.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteFacesOutput {
    pub deleted_faces: Vec<String>,
    pub unsuccessful_face_deletions: Vec<UnsuccessfulFaceDeletion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchFacesOutput {
    pub searched_face_id: Option<String>,
    /// Matches ordered by similarity, highest first.
    pub face_matches: Vec<FaceMatch>,
    pub face_model_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchFacesByImageOutput {
    /// The largest face in the input image, which was used for the search.
    pub searched_face_bounding_box: Option<BoundingBox>,
    pub searched_face_confidence: Option<f32>,
    pub face_matches: Vec<FaceMatch>,
    pub face_model_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Image analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectFacesOutput {
    pub face_details: Vec<FaceDetail>,
    pub orientation_correction: Option<OrientationCorrection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectLabelsOutput {
    pub labels: Vec<Label>,
    pub orientation_correction: Option<OrientationCorrection>,
    pub label_model_version: Option<String>,
}

impl DetectLabelsOutput {
    /// Label names with at least `min_confidence`, highest confidence first.
    #[must_use]
    pub fn names_above(&self, min_confidence: f32) -> Vec<&str> {
        let mut labels: Vec<(&str, f32)> = self
            .labels
            .iter()
            .filter_map(|label| Some((label.name.as_deref()?, label.confidence.unwrap_or(0.0))))
            .filter(|(_, confidence)| *confidence >= min_confidence)
            .collect();
        labels.sort_by(|a, b| b.1.total_cmp(&a.1));
        labels.into_iter().map(|(name, _)| name).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RecognizeCelebritiesOutput {
    pub celebrity_faces: Vec<Celebrity>,
    pub unrecognized_faces: Vec<ComparedFace>,
    pub orientation_correction: Option<OrientationCorrection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCelebrityInfoOutput {
    pub urls: Vec<String>,
    pub name: Option<String>,
    pub known_gender: Option<KnownGender>,
}

// ---------------------------------------------------------------------------
// Custom labels projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateProjectOutput {
    pub project_arn: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteProjectOutput {
    pub status: Option<ProjectStatus>,
}
