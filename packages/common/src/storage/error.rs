use thiserror::Error;

/// Errors that can occur while storing or loading image bytes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The referenced image file no longer exists.
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The upload exceeds the configured size limit.
    #[error("image exceeds size limit ({actual} > {limit} bytes)")]
    SizeLimitExceeded { actual: u64, limit: u64 },
}
