use async_trait::async_trait;

use super::error::StorageError;
use super::filesystem::read_image_file;
use super::source::ImageSource;
use super::traits::ImageStore;

/// Image store that keeps the bytes inline with the photo record.
///
/// Nothing touches disk; the returned source carries the bytes and the
/// record store persists them as part of the row.
pub struct InlineImageStore {
    max_size: u64,
}

impl InlineImageStore {
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }
}

#[async_trait]
impl ImageStore for InlineImageStore {
    async fn put(&self, data: &[u8], _filename: &str) -> Result<ImageSource, StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }
        Ok(ImageSource::Inline {
            data: data.to_vec(),
        })
    }

    async fn load(&self, source: &ImageSource) -> Result<Vec<u8>, StorageError> {
        match source {
            ImageSource::Inline { data } => Ok(data.clone()),
            // Rows written under an earlier filesystem configuration.
            ImageSource::File { path } => read_image_file(path).await,
        }
    }
}
