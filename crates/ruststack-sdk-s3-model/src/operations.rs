//! S3 operation identifiers.

macro_rules! s3_operations {
    ($($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        /// All S3 operations supported by the client.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum S3Operation {
            $($(#[$doc])* $variant,)+
        }

        impl S3Operation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [S3Operation] = &[$(Self::$variant),+];

            /// Operation name as it appears in the API reference.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Look an operation up by its API name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

s3_operations! {
    // Buckets
    /// `PUT /{Bucket}`
    CreateBucket,
    /// `DELETE /{Bucket}`
    DeleteBucket,
    /// `HEAD /{Bucket}`
    HeadBucket,
    /// `GET /`
    ListBuckets,
    /// `GET /{Bucket}?location`
    GetBucketLocation,

    // Bucket subresources
    GetBucketAcl,
    PutBucketAcl,
    GetBucketVersioning,
    PutBucketVersioning,
    GetBucketTagging,
    PutBucketTagging,
    DeleteBucketTagging,
    GetBucketPolicy,
    PutBucketPolicy,
    DeleteBucketPolicy,
    GetBucketCors,
    PutBucketCors,
    DeleteBucketCors,

    // Objects
    PutObject,
    GetObject,
    HeadObject,
    DeleteObject,
    /// `POST /{Bucket}?delete`, up to 1000 keys.
    DeleteObjects,
    /// `PUT /{Bucket}/{Key}` with `x-amz-copy-source`.
    CopyObject,
    GetObjectAcl,
    PutObjectAcl,
    GetObjectTagging,
    PutObjectTagging,
    DeleteObjectTagging,

    // Listing
    ListObjectsV2,
    ListObjectVersions,

    // Multipart
    CreateMultipartUpload,
    UploadPart,
    CompleteMultipartUpload,
    AbortMultipartUpload,
    ListParts,
    ListMultipartUploads,
}

impl S3Operation {
    /// Whether the AWS API requires a `Content-MD5` header for this operation.
    #[must_use]
    pub fn requires_content_md5(&self) -> bool {
        matches!(
            self,
            Self::DeleteObjects
                | Self::PutBucketAcl
                | Self::PutBucketCors
                | Self::PutBucketTagging
                | Self::PutBucketVersioning
                | Self::PutObjectAcl
                | Self::PutObjectTagging
        )
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
