//! Rekognition operation inputs.
//!
//! Inputs serialize to the `awsJson1_1` request body with `PascalCase`
//! member names. Optional members are omitted when `None` and empty lists
//! and maps are omitted. `validate()` enforces the documented required
//! members, lengths, patterns and ranges before anything is sent.

use std::collections::HashMap;

use ruststack_sdk_core::SdkError;
use serde::{Deserialize, Serialize};

use crate::operations::RekognitionOperation;
use crate::output::{
    CreateCollectionOutput, CreateProjectOutput, DeleteCollectionOutput, DeleteFacesOutput,
    DeleteProjectOutput, DescribeCollectionOutput, DetectFacesOutput, DetectLabelsOutput,
    GetCelebrityInfoOutput, IndexFacesOutput, ListCollectionsOutput, ListFacesOutput,
    RecognizeCelebritiesOutput, SearchFacesByImageOutput, SearchFacesOutput,
};
use crate::types::{Attribute, EnumValue, Image, QualityFilter};

/// Upper bound of `MaxResults` and `MaxFaces`.
pub const MAX_FACES: i32 = 4096;
/// Most face ids accepted by `DeleteFaces`.
pub const MAX_FACE_IDS: usize = 4096;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn op_name(op: RekognitionOperation) -> &'static str {
    op.as_str()
}

/// Identifier made of `[a-zA-Z0-9_.\-]` (plus `extra`), 1 to `max` characters.
fn validate_identifier(
    op: RekognitionOperation,
    field: &str,
    value: &str,
    max: usize,
    extra: &[char],
) -> Result<(), SdkError> {
    if value.is_empty() {
        return Err(SdkError::missing_field(op_name(op), field));
    }
    if value.len() > max {
        return Err(SdkError::validation(
            op_name(op),
            format!("{field} must be at most {max} characters"),
        ));
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') || extra.contains(&c);
    if let Some(bad) = value.chars().find(|c| !allowed(*c)) {
        return Err(SdkError::validation(
            op_name(op),
            format!("{field} `{value}` contains invalid character {bad:?}"),
        ));
    }
    Ok(())
}

fn validate_collection_id(op: RekognitionOperation, value: &str) -> Result<(), SdkError> {
    validate_identifier(op, "CollectionId", value, 255, &[])
}

/// Face ids are lowercase UUIDs.
fn validate_face_id(op: RekognitionOperation, field: &str, value: &str) -> Result<(), SdkError> {
    if value.is_empty() {
        return Err(SdkError::missing_field(op_name(op), field));
    }
    let groups: Vec<&str> = value.split('-').collect();
    let lengths_ok = groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(group, len)| group.len() == len);
    let hex_ok = value
        .chars()
        .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c));
    if lengths_ok && hex_ok {
        Ok(())
    } else {
        Err(SdkError::validation(
            op_name(op),
            format!("{field} `{value}` is not a valid face id"),
        ))
    }
}

fn validate_int_range(
    op: RekognitionOperation,
    field: &str,
    value: Option<i32>,
    range: std::ops::RangeInclusive<i32>,
) -> Result<(), SdkError> {
    match value {
        Some(v) if !range.contains(&v) => Err(SdkError::validation(
            op_name(op),
            format!(
                "{field} must be between {} and {}, got {v}",
                range.start(),
                range.end()
            ),
        )),
        _ => Ok(()),
    }
}

fn validate_percentage(
    op: RekognitionOperation,
    field: &str,
    value: Option<f32>,
) -> Result<(), SdkError> {
    match value {
        Some(v) if !(0.0..=100.0).contains(&v) => Err(SdkError::validation(
            op_name(op),
            format!("{field} must be between 0 and 100, got {v}"),
        )),
        _ => Ok(()),
    }
}

fn validate_enum<E: EnumValue>(value: Option<&E>) -> Result<(), SdkError> {
    match value {
        Some(v) if !v.is_known() => Err(SdkError::invalid_enum(E::TYPE_NAME, v.as_str())),
        _ => Ok(()),
    }
}

fn validate_next_token(op: RekognitionOperation, token: Option<&str>) -> Result<(), SdkError> {
    match token {
        Some(t) if t.len() > 255 => Err(SdkError::validation(
            op_name(op),
            "NextToken must be at most 255 characters",
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Input for the `CreateCollection` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCollectionInput {
    pub collection_id: String,

    /// Tags attached to the collection.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CreateCollectionInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::CreateCollection;
        validate_collection_id(op, &self.collection_id)?;
        if self.tags.len() > 200 {
            return Err(SdkError::validation(
                op_name(op),
                format!("at most 200 tags are allowed, got {}", self.tags.len()),
            ));
        }
        for (key, value) in &self.tags {
            if key.is_empty() || key.chars().count() > 128 {
                return Err(SdkError::validation(
                    op_name(op),
                    format!("tag key `{key}` must be 1 to 128 characters"),
                ));
            }
            if value.chars().count() > 256 {
                return Err(SdkError::validation(
                    op_name(op),
                    format!("value of tag `{key}` exceeds 256 characters"),
                ));
            }
        }
        Ok(())
    }
}

/// Input for the `DeleteCollection` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCollectionInput {
    pub collection_id: String,
}

impl DeleteCollectionInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        validate_collection_id(RekognitionOperation::DeleteCollection, &self.collection_id)
    }
}

/// Input for the `DescribeCollection` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCollectionInput {
    pub collection_id: String,
}

impl DescribeCollectionInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        validate_collection_id(RekognitionOperation::DescribeCollection, &self.collection_id)
    }
}

/// Input for the `ListCollections` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCollectionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListCollectionsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::ListCollections;
        validate_next_token(op, self.next_token.as_deref())?;
        validate_int_range(op, "MaxResults", self.max_results, 0..=MAX_FACES)
    }
}

// ---------------------------------------------------------------------------
// Faces in collections
// ---------------------------------------------------------------------------

/// Input for the `IndexFaces` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFacesInput {
    pub collection_id: String,
    pub image: Image,

    /// Caller-side id stored with every face indexed from this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_image_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detection_attributes: Vec<Attribute>,

    /// Index at most this many faces, largest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_filter: Option<QualityFilter>,
}

impl IndexFacesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::IndexFaces;
        validate_collection_id(op, &self.collection_id)?;
        self.image.validate(op_name(op))?;
        if let Some(id) = &self.external_image_id {
            validate_identifier(op, "ExternalImageId", id, 255, &[':'])?;
        }
        for attribute in &self.detection_attributes {
            validate_enum(Some(attribute))?;
        }
        validate_int_range(op, "MaxFaces", self.max_faces, 1..=MAX_FACES)?;
        validate_enum(self.quality_filter.as_ref())
    }
}

/// Input for the `ListFaces` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFacesInput {
    pub collection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Only list faces associated with this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Only list these faces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub face_ids: Vec<String>,
}

impl ListFacesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::ListFaces;
        validate_collection_id(op, &self.collection_id)?;
        validate_next_token(op, self.next_token.as_deref())?;
        validate_int_range(op, "MaxResults", self.max_results, 0..=MAX_FACES)?;
        if let Some(user) = &self.user_id {
            validate_identifier(op, "UserId", user, 128, &[':'])?;
        }
        for id in &self.face_ids {
            validate_face_id(op, "FaceIds", id)?;
        }
        Ok(())
    }
}

/// Input for the `DeleteFaces` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFacesInput {
    pub collection_id: String,
    pub face_ids: Vec<String>,
}

impl DeleteFacesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::DeleteFaces;
        validate_collection_id(op, &self.collection_id)?;
        if self.face_ids.is_empty() {
            return Err(SdkError::missing_field(op_name(op), "FaceIds"));
        }
        if self.face_ids.len() > MAX_FACE_IDS {
            return Err(SdkError::validation(
                op_name(op),
                format!(
                    "at most {MAX_FACE_IDS} face ids are allowed, got {}",
                    self.face_ids.len()
                ),
            ));
        }
        for id in &self.face_ids {
            validate_face_id(op, "FaceIds", id)?;
        }
        Ok(())
    }
}

/// Input for the `SearchFaces` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesInput {
    pub collection_id: String,
    pub face_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,
    /// Minimum similarity, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
}

impl SearchFacesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::SearchFaces;
        validate_collection_id(op, &self.collection_id)?;
        validate_face_id(op, "FaceId", &self.face_id)?;
        validate_int_range(op, "MaxFaces", self.max_faces, 1..=MAX_FACES)?;
        validate_percentage(op, "FaceMatchThreshold", self.face_match_threshold)
    }
}

/// Input for the `SearchFacesByImage` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesByImageInput {
    pub collection_id: String,
    pub image: Image,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_filter: Option<QualityFilter>,
}

impl SearchFacesByImageInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::SearchFacesByImage;
        validate_collection_id(op, &self.collection_id)?;
        self.image.validate(op_name(op))?;
        validate_int_range(op, "MaxFaces", self.max_faces, 1..=MAX_FACES)?;
        validate_percentage(op, "FaceMatchThreshold", self.face_match_threshold)?;
        validate_enum(self.quality_filter.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Image analysis
// ---------------------------------------------------------------------------

/// Input for the `DetectFaces` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesInput {
    pub image: Image,
    /// `DEFAULT` when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl DetectFacesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        self.image
            .validate(op_name(RekognitionOperation::DetectFaces))?;
        self.attributes
            .iter()
            .try_for_each(|attribute| validate_enum(Some(attribute)))
    }
}

/// Input for the `DetectLabels` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsInput {
    pub image: Image,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_labels: Option<i32>,
    /// Minimum label confidence, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
}

impl DetectLabelsInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::DetectLabels;
        self.image.validate(op_name(op))?;
        validate_int_range(op, "MaxLabels", self.max_labels, 0..=i32::MAX)?;
        validate_percentage(op, "MinConfidence", self.min_confidence)
    }
}

/// Input for the `RecognizeCelebrities` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognizeCelebritiesInput {
    pub image: Image,
}

impl RecognizeCelebritiesInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        self.image
            .validate(op_name(RekognitionOperation::RecognizeCelebrities))
    }
}

/// Input for the `GetCelebrityInfo` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCelebrityInfoInput {
    pub id: String,
}

impl GetCelebrityInfoInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::GetCelebrityInfo;
        if self.id.is_empty() {
            return Err(SdkError::missing_field(op_name(op), "Id"));
        }
        if !self.id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SdkError::validation(
                op_name(op),
                format!("Id `{}` must be alphanumeric", self.id),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Custom labels projects
// ---------------------------------------------------------------------------

/// Input for the `CreateProject` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectInput {
    pub project_name: String,
}

impl CreateProjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        validate_identifier(
            RekognitionOperation::CreateProject,
            "ProjectName",
            &self.project_name,
            255,
            &[],
        )
    }
}

/// Input for the `DeleteProject` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteProjectInput {
    pub project_arn: String,
}

impl DeleteProjectInput {
    pub fn validate(&self) -> Result<(), SdkError> {
        let op = RekognitionOperation::DeleteProject;
        if self.project_arn.is_empty() {
            return Err(SdkError::missing_field(op_name(op), "ProjectArn"));
        }
        if !(20..=2048).contains(&self.project_arn.len())
            || !self.project_arn.starts_with("arn:aws")
        {
            return Err(SdkError::validation(
                op_name(op),
                format!("ProjectArn `{}` is not a project ARN", self.project_arn),
            ));
        }
        Ok(())
    }
}

operation! {
    CreateCollectionInput => CreateCollectionOutput: CreateCollection,
    DeleteCollectionInput => DeleteCollectionOutput: DeleteCollection,
    DescribeCollectionInput => DescribeCollectionOutput: DescribeCollection,
    ListCollectionsInput => ListCollectionsOutput: ListCollections,
    IndexFacesInput => IndexFacesOutput: IndexFaces,
    ListFacesInput => ListFacesOutput: ListFaces,
    DeleteFacesInput => DeleteFacesOutput: DeleteFaces,
    SearchFacesInput => SearchFacesOutput: SearchFaces,
    SearchFacesByImageInput => SearchFacesByImageOutput: SearchFacesByImage,
    DetectFacesInput => DetectFacesOutput: DetectFaces,
    DetectLabelsInput => DetectLabelsOutput: DetectLabels,
    RecognizeCelebritiesInput => RecognizeCelebritiesOutput: RecognizeCelebrities,
    GetCelebrityInfoInput => GetCelebrityInfoOutput: GetCelebrityInfo,
    CreateProjectInput => CreateProjectOutput: CreateProject,
    DeleteProjectInput => DeleteProjectOutput: DeleteProject,
}
