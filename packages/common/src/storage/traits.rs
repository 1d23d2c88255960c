use async_trait::async_trait;

use super::error::StorageError;
use super::source::ImageSource;

/// Backend-agnostic image persistence.
///
/// `put` decides the representation; `load` must accept either variant so
/// that rows written under a previous storage configuration stay readable.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist image bytes and return the source to record with the photo.
    async fn put(&self, data: &[u8], filename: &str) -> Result<ImageSource, StorageError>;

    /// Fetch the full bytes for a previously stored image.
    async fn load(&self, source: &ImageSource) -> Result<Vec<u8>, StorageError>;
}
