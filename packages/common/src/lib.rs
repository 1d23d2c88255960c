pub mod storage;

pub use storage::{ImageSource, ImageStore, StorageError};
