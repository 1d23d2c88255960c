mod error;
mod source;
mod traits;

pub mod filesystem;
pub mod inline;

pub use error::StorageError;
pub use source::ImageSource;
pub use traits::ImageStore;
