use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::entity::photo;

/// Photo metadata as shown in the gallery grid. The bytes themselves are
/// served separately from the content endpoint.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PhotoResponse {
    pub id: Uuid,
    pub client_email: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl From<photo::Model> for PhotoResponse {
    fn from(m: photo::Model) -> Self {
        Self {
            id: m.id,
            client_email: m.client_email,
            filename: m.filename,
            content_type: m.content_type,
            is_favorite: m.is_favorite,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ToggleFavoriteResponse {
    pub id: Uuid,
    /// The value after the flip.
    pub is_favorite: bool,
}
