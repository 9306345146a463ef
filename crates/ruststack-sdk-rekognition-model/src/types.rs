//! Rekognition enumerations and value objects.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]` to match the
//! `awsJson1_1` wire format. Absent members decode to `None` or empty
//! collections.

use ruststack_sdk_core::SdkError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Common view over the string enumerations.
pub trait EnumValue {
    /// Rust type name, used in error messages.
    const TYPE_NAME: &'static str;

    /// Whether the value is one the service documents.
    fn is_known(&self) -> bool;

    /// Wire representation.
    fn as_str(&self) -> &str;
}

rekognition_enum! {
    /// Facial attributes returned by `DetectFaces` and `IndexFaces`.
    Attribute {
        Default => "DEFAULT",
        All => "ALL",
    }
}

rekognition_enum! {
    /// Filter applied to low quality faces before indexing or searching.
    QualityFilter {
        None => "NONE",
        Auto => "AUTO",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

rekognition_enum! {
    /// Rotation applied to correct the image orientation.
    OrientationCorrection {
        Rotate0 => "ROTATE_0",
        Rotate90 => "ROTATE_90",
        Rotate180 => "ROTATE_180",
        Rotate270 => "ROTATE_270",
    }
}

rekognition_enum! {
    EmotionName {
        Happy => "HAPPY",
        Sad => "SAD",
        Angry => "ANGRY",
        Confused => "CONFUSED",
        Disgusted => "DISGUSTED",
        Surprised => "SURPRISED",
        Calm => "CALM",
        Undetermined => "UNKNOWN",
        Fear => "FEAR",
    }
}

rekognition_enum! {
    GenderType {
        Male => "Male",
        Female => "Female",
    }
}

rekognition_enum! {
    KnownGenderType {
        Male => "Male",
        Female => "Female",
        Nonbinary => "Nonbinary",
        Unlisted => "Unlisted",
    }
}

rekognition_enum! {
    LandmarkType {
        EyeLeft => "eyeLeft",
        EyeRight => "eyeRight",
        Nose => "nose",
        MouthLeft => "mouthLeft",
        MouthRight => "mouthRight",
        LeftEyeBrowLeft => "leftEyeBrowLeft",
        LeftEyeBrowRight => "leftEyeBrowRight",
        LeftEyeBrowUp => "leftEyeBrowUp",
        RightEyeBrowLeft => "rightEyeBrowLeft",
        RightEyeBrowRight => "rightEyeBrowRight",
        RightEyeBrowUp => "rightEyeBrowUp",
        LeftEyeLeft => "leftEyeLeft",
        LeftEyeRight => "leftEyeRight",
        LeftEyeUp => "leftEyeUp",
        LeftEyeDown => "leftEyeDown",
        RightEyeLeft => "rightEyeLeft",
        RightEyeRight => "rightEyeRight",
        RightEyeUp => "rightEyeUp",
        RightEyeDown => "rightEyeDown",
        NoseLeft => "noseLeft",
        NoseRight => "noseRight",
        MouthUp => "mouthUp",
        MouthDown => "mouthDown",
        LeftPupil => "leftPupil",
        RightPupil => "rightPupil",
        UpperJawlineLeft => "upperJawlineLeft",
        MidJawlineLeft => "midJawlineLeft",
        ChinBottom => "chinBottom",
        MidJawlineRight => "midJawlineRight",
        UpperJawlineRight => "upperJawlineRight",
    }
}

rekognition_enum! {
    /// Why `IndexFaces` skipped a detected face.
    Reason {
        ExceedsMaxFaces => "EXCEEDS_MAX_FACES",
        ExtremePose => "EXTREME_POSE",
        LowBrightness => "LOW_BRIGHTNESS",
        LowSharpness => "LOW_SHARPNESS",
        LowConfidence => "LOW_CONFIDENCE",
        SmallBoundingBox => "SMALL_BOUNDING_BOX",
        LowFaceQuality => "LOW_FACE_QUALITY",
    }
}

rekognition_enum! {
    ProjectStatus {
        Creating => "CREATING",
        Created => "CREATED",
        Deleting => "DELETING",
    }
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

/// Largest inline image accepted by the service (5 MiB of raw bytes).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image stored in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Image to analyse: inline bytes or an S3 object, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    /// Raw image bytes; base64-encoded on the wire.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "base64_blob"
    )]
    pub bytes: Option<Vec<u8>>,
    #[serde(rename = "S3Object", skip_serializing_if = "Option::is_none")]
    pub s3_object: Option<S3Object>,
}

impl Image {
    /// Image from raw bytes (JPEG or PNG).
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            s3_object: None,
        }
    }

    /// Image stored in S3.
    #[must_use]
    pub fn from_s3(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bytes: None,
            s3_object: Some(S3Object {
                bucket: Some(bucket.into()),
                name: Some(name.into()),
                version: None,
            }),
        }
    }

    /// Check that exactly one source is set and within limits.
    pub fn validate(&self, operation: &'static str) -> Result<(), SdkError> {
        match (&self.bytes, &self.s3_object) {
            (Some(_), Some(_)) => Err(SdkError::validation(
                operation,
                "Image must set either Bytes or S3Object, not both",
            )),
            (None, None) => Err(SdkError::validation(
                operation,
                "Image must set either Bytes or S3Object",
            )),
            (Some(bytes), None) => {
                if bytes.is_empty() || bytes.len() > MAX_IMAGE_BYTES {
                    return Err(SdkError::validation(
                        operation,
                        format!(
                            "Image.Bytes must be between 1 and {MAX_IMAGE_BYTES} bytes, got {}",
                            bytes.len()
                        ),
                    ));
                }
                Ok(())
            }
            (None, Some(object)) => {
                let bucket = object.bucket.as_deref().unwrap_or_default();
                if bucket.is_empty() {
                    return Err(SdkError::missing_field(operation, "Image.S3Object.Bucket"));
                }
                if !(3..=255).contains(&bucket.len()) {
                    return Err(SdkError::validation(
                        operation,
                        format!("Image.S3Object.Bucket `{bucket}` must be 3 to 255 characters"),
                    ));
                }
                let name = object.name.as_deref().unwrap_or_default();
                if name.is_empty() {
                    return Err(SdkError::missing_field(operation, "Image.S3Object.Name"));
                }
                if name.len() > 1024 {
                    return Err(SdkError::validation(
                        operation,
                        "Image.S3Object.Name must be at most 1024 characters",
                    ));
                }
                Ok(())
            }
        }
    }
}

mod base64_blob {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

// ---------------------------------------------------------------------------
// Face geometry and attributes
// ---------------------------------------------------------------------------

/// Box around a detected face or object, as ratios of the image size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub left: Option<f32>,
    pub top: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Landmark {
    pub r#type: Option<LandmarkType>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pose {
    pub roll: Option<f32>,
    pub yaw: Option<f32>,
    pub pitch: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageQuality {
    pub brightness: Option<f32>,
    pub sharpness: Option<f32>,
}

/// Estimated age range in years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgeRange {
    pub low: Option<i32>,
    pub high: Option<i32>,
}

/// A yes/no facial attribute (smile, eyeglasses, beard, ...) with its confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacialFeature {
    pub value: Option<bool>,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gender {
    pub value: Option<GenderType>,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Emotion {
    pub r#type: Option<EmotionName>,
    pub confidence: Option<f32>,
}

/// Attributes of a detected face. Only bounding box, confidence, landmarks,
/// pose and quality are present unless `ALL` attributes were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    pub bounding_box: Option<BoundingBox>,
    pub age_range: Option<AgeRange>,
    pub smile: Option<FacialFeature>,
    pub eyeglasses: Option<FacialFeature>,
    pub sunglasses: Option<FacialFeature>,
    pub gender: Option<Gender>,
    pub beard: Option<FacialFeature>,
    pub mustache: Option<FacialFeature>,
    pub eyes_open: Option<FacialFeature>,
    pub mouth_open: Option<FacialFeature>,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    pub pose: Option<Pose>,
    pub quality: Option<ImageQuality>,
    pub confidence: Option<f32>,
}

/// Face returned by celebrity recognition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedFace {
    pub bounding_box: Option<BoundingBox>,
    pub confidence: Option<f32>,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    pub pose: Option<Pose>,
    pub quality: Option<ImageQuality>,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
    pub smile: Option<FacialFeature>,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A face stored in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Face {
    pub face_id: Option<String>,
    pub bounding_box: Option<BoundingBox>,
    pub image_id: Option<String>,
    pub external_image_id: Option<String>,
    pub confidence: Option<f32>,
    pub index_faces_model_version: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceRecord {
    pub face: Option<Face>,
    pub face_detail: Option<FaceDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnindexedFace {
    #[serde(default)]
    pub reasons: Vec<Reason>,
    pub face_detail: Option<FaceDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceMatch {
    pub similarity: Option<f32>,
    pub face: Option<Face>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulFaceDeletion {
    pub face_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// Labels and celebrities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub bounding_box: Option<BoundingBox>,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parent {
    pub name: Option<String>,
}

/// A detected object, scene or concept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    pub name: Option<String>,
    pub confidence: Option<f32>,
    #[serde(default)]
    pub instances: Vec<Instance>,
    #[serde(default)]
    pub parents: Vec<Parent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KnownGender {
    pub r#type: Option<KnownGenderType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Celebrity {
    #[serde(default)]
    pub urls: Vec<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub face: Option<ComparedFace>,
    pub match_confidence: Option<f32>,
    pub known_gender: Option<KnownGender>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_should_parse_known_enum_values_strictly() {
        assert_eq!(QualityFilter::from_str("AUTO").unwrap(), QualityFilter::Auto);
        assert_eq!(Attribute::from_str("ALL").unwrap(), Attribute::All);
        let err = QualityFilter::from_str("auto").unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidEnumValue { type_name: "QualityFilter", .. }
        ));
    }

    #[test]
    fn test_should_decode_unknown_enum_values_leniently() {
        let value: OrientationCorrection = serde_json::from_str("\"ROTATE_45\"").unwrap();
        assert_eq!(value, OrientationCorrection::Unknown("ROTATE_45".to_owned()));
        assert!(!value.is_known());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"ROTATE_45\"");
    }

    #[test]
    fn test_should_encode_inline_image_as_base64() {
        let image = Image::from_bytes(b"hello".to_vec());
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json, serde_json::json!({ "Bytes": "aGVsbG8=" }));

        let decoded: Image = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.bytes.as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn test_should_encode_s3_image() {
        let image = Image::from_s3("photos", "team/alice.jpg");
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "S3Object": { "Bucket": "photos", "Name": "team/alice.jpg" } })
        );
    }

    #[test]
    fn test_should_require_exactly_one_image_source() {
        assert!(Image::default().validate("DetectLabels").is_err());

        let both = Image {
            bytes: Some(vec![1]),
            ..Image::from_s3("photos", "a.jpg")
        };
        assert!(both.validate("DetectLabels").is_err());

        assert!(Image::from_bytes(vec![1, 2, 3]).validate("DetectLabels").is_ok());
        assert!(Image::from_bytes(Vec::new()).validate("DetectLabels").is_err());
        assert!(Image::from_s3("ab", "a.jpg").validate("DetectLabels").is_err());
    }

    #[test]
    fn test_should_decode_face_detail_with_missing_members() {
        let detail: FaceDetail = serde_json::from_str(
            r#"{"BoundingBox":{"Width":0.5,"Height":0.4,"Left":0.1,"Top":0.2},
                "Landmarks":[{"Type":"eyeLeft","X":0.3,"Y":0.4}],
                "Smile":{"Value":true,"Confidence":98.5},
                "Confidence":99.9}"#,
        )
        .unwrap();
        assert_eq!(detail.landmarks[0].r#type, Some(LandmarkType::EyeLeft));
        assert_eq!(detail.smile.and_then(|s| s.value), Some(true));
        assert!(detail.emotions.is_empty());
        assert!(detail.gender.is_none());
    }
}
