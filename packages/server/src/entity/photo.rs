use common::storage::ImageSource;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning project's client email. Logically scoped, not a hard FK.
    pub client_email: String,

    /// Original upload filename.
    pub filename: String,

    /// MIME type as supplied at upload time.
    pub content_type: Option<String>,

    /// Inline-blob representation; set when the inline store is configured.
    pub inline_data: Option<Vec<u8>>,

    /// Filesystem-reference representation; set by the filesystem store.
    pub file_path: Option<String>,

    /// Client-toggled selection flag. The only client-mutable field.
    pub is_favorite: bool,

    pub created_at: DateTimeUtc,
}

impl Model {
    /// Reconstruct the image source from whichever representation this row
    /// carries. `None` means the row is corrupt (neither column set).
    pub fn image_source(&self) -> Option<ImageSource> {
        if let Some(data) = &self.inline_data {
            return Some(ImageSource::Inline { data: data.clone() });
        }
        self.file_path
            .as_ref()
            .map(|path| ImageSource::File { path: path.clone() })
    }
}

impl ActiveModelBehavior for ActiveModel {}
