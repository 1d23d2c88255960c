use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::source::ImageSource;
use super::traits::ImageStore;

/// Filesystem-backed image store.
///
/// Files are written as `{uuid}_{sanitized original name}` under the media
/// directory, via a temp file + rename so a crashed upload never leaves a
/// half-written image at its final path.
pub struct FilesystemImageStore {
    media_dir: PathBuf,
    max_size: u64,
}

impl FilesystemImageStore {
    pub async fn new(media_dir: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&media_dir).await?;
        fs::create_dir_all(media_dir.join(".tmp")).await?;
        Ok(Self {
            media_dir,
            max_size,
        })
    }

    /// Final path for an upload. The uuid prefix keeps repeated uploads of
    /// the same filename from colliding.
    fn target_path(&self, filename: &str) -> PathBuf {
        let name = format!("{}_{}", uuid::Uuid::now_v7(), sanitize_filename(filename));
        self.media_dir.join(name)
    }

    fn temp_path(&self) -> PathBuf {
        self.media_dir
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn put(&self, data: &[u8], filename: &str) -> Result<ImageSource, StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let target = self.target_path(filename);
        let temp = self.temp_path();

        if let Err(e) = fs::write(&temp, data).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        Ok(ImageSource::File {
            path: target.to_string_lossy().into_owned(),
        })
    }

    async fn load(&self, source: &ImageSource) -> Result<Vec<u8>, StorageError> {
        match source {
            ImageSource::Inline { data } => Ok(data.clone()),
            ImageSource::File { path } => read_image_file(path).await,
        }
    }
}

/// Strip any directory components, then keep only characters that are safe
/// in a filename across platforms.
pub fn sanitize_filename(name: &str) -> String {
    let name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

pub(crate) async fn read_image_file(path: &str) -> Result<Vec<u8>, StorageError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(StorageError::NotFound(path.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
