//! Raw payloads.

use bytes::Bytes;

/// An object body.
///
/// Bodies are fully buffered in memory on both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingBlob {
    /// The underlying bytes.
    pub data: Bytes,
}

impl StreamingBlob {
    /// Create a blob from anything convertible to `Bytes`.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Consume the blob and return its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for StreamingBlob {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&'static [u8]> for StreamingBlob {
    fn from(data: &'static [u8]) -> Self {
        Self {
            data: Bytes::from_static(data),
        }
    }
}

impl From<String> for StreamingBlob {
    fn from(data: String) -> Self {
        Self { data: data.into() }
    }
}
