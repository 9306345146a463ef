//! Rekognition operation enum and the input/output binding trait.

use std::fmt;

use ruststack_sdk_core::SdkError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Target prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "RekognitionService";

/// All supported Rekognition operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RekognitionOperation {
    // Collections
    CreateCollection,
    DeleteCollection,
    DescribeCollection,
    ListCollections,

    // Faces in collections
    IndexFaces,
    ListFaces,
    DeleteFaces,
    SearchFaces,
    SearchFacesByImage,

    // Image analysis
    DetectFaces,
    DetectLabels,
    RecognizeCelebrities,
    GetCelebrityInfo,

    // Custom labels projects
    CreateProject,
    DeleteProject,
}

impl RekognitionOperation {
    /// Every operation.
    pub const ALL: &'static [Self] = &[
        Self::CreateCollection,
        Self::DeleteCollection,
        Self::DescribeCollection,
        Self::ListCollections,
        Self::IndexFaces,
        Self::ListFaces,
        Self::DeleteFaces,
        Self::SearchFaces,
        Self::SearchFacesByImage,
        Self::DetectFaces,
        Self::DetectLabels,
        Self::RecognizeCelebrities,
        Self::GetCelebrityInfo,
        Self::CreateProject,
        Self::DeleteProject,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateCollection => "CreateCollection",
            Self::DeleteCollection => "DeleteCollection",
            Self::DescribeCollection => "DescribeCollection",
            Self::ListCollections => "ListCollections",
            Self::IndexFaces => "IndexFaces",
            Self::ListFaces => "ListFaces",
            Self::DeleteFaces => "DeleteFaces",
            Self::SearchFaces => "SearchFaces",
            Self::SearchFacesByImage => "SearchFacesByImage",
            Self::DetectFaces => "DetectFaces",
            Self::DetectLabels => "DetectLabels",
            Self::RecognizeCelebrities => "RecognizeCelebrities",
            Self::GetCelebrityInfo => "GetCelebrityInfo",
            Self::CreateProject => "CreateProject",
            Self::DeleteProject => "DeleteProject",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Value of the `X-Amz-Target` header, e.g. `RekognitionService.DetectLabels`.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }
}

impl fmt::Display for RekognitionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation input serialized as the JSON request body.
pub trait OperationInput: Serialize {
    /// Result type decoded from the JSON response body.
    type Output: DeserializeOwned + Default;

    /// Operation sent in `X-Amz-Target`.
    const OPERATION: RekognitionOperation;

    /// Check required members and member constraints.
    fn validate(&self) -> Result<(), SdkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in RekognitionOperation::ALL {
            assert_eq!(RekognitionOperation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(RekognitionOperation::from_name("DetectText"), None);
    }

    #[test]
    fn test_should_build_target_header() {
        assert_eq!(
            RekognitionOperation::SearchFacesByImage.target(),
            "RekognitionService.SearchFacesByImage"
        );
    }
}
