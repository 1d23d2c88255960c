use axum::Json;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use common::storage::ImageSource;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;
use tracing::instrument;
use uuid::Uuid;

use crate::entity::photo;
use crate::error::{AppError, ErrorBody};
use crate::models::photo::*;
use crate::models::shared::validate_email;
use crate::state::AppState;

use super::project::find_project;

#[utoipa::path(
    get,
    path = "/{email}/photos",
    tag = "Photos",
    operation_id = "listPhotos",
    summary = "List gallery photos for a client",
    description = "Returns photo metadata for the client's gallery in upload order, so the grid layout is stable across reloads.",
    params(("email" = String, Path, description = "Client email address")),
    responses(
        (status = 200, description = "Photos in upload order", body = Vec<PhotoResponse>),
        (status = 400, description = "Invalid email (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_photos(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PhotoResponse>>, AppError> {
    let email = validate_email(&email)?;

    let models = photo::Entity::find()
        .filter(photo::Column::ClientEmail.eq(email))
        .order_by_asc(photo::Column::CreatedAt)
        .order_by_asc(photo::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/{email}/photos",
    tag = "Photos",
    operation_id = "uploadPhoto",
    summary = "Upload a photo to a client's gallery",
    description = "Staff upload. Stores the image through the configured backend (inline blob or media-dir file) and appends a photo record; photos are never edited or deleted afterwards. The project must already exist. Body limit: 32 MB.",
    params(("email" = String, Path, description = "Client email address")),
    request_body(content_type = "multipart/form-data", description = "Image file in the `file` field"),
    responses(
        (status = 201, description = "Photo stored", body = PhotoResponse),
        (status = 400, description = "Missing/oversized file or invalid email (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No project for this email (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(email): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let email = validate_email(&email)?.to_string();
    find_project(&state.db, &email).await?;

    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(|m| m.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
            upload = Some((filename, content_type, data.to_vec()));
            break;
        }
    }

    let (filename, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".into()));
    }

    let source = state.images.put(&data, &filename).await?;
    let (inline_data, file_path) = match source {
        ImageSource::Inline { data } => (Some(data), None),
        ImageSource::File { path } => (None, Some(path)),
    };

    let new_photo = photo::ActiveModel {
        id: Set(Uuid::now_v7()),
        client_email: Set(email),
        filename: Set(filename),
        content_type: Set(content_type),
        inline_data: Set(inline_data),
        file_path: Set(file_path),
        is_favorite: Set(false),
        created_at: Set(chrono::Utc::now()),
    };
    let model = new_photo.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(PhotoResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Photos",
    operation_id = "getPhoto",
    summary = "Get photo metadata",
    params(("id" = Uuid, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo metadata", body = PhotoResponse),
        (status = 404, description = "Photo not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PhotoResponse>, AppError> {
    let model = find_photo(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/{id}/content",
    tag = "Photos",
    operation_id = "getPhotoContent",
    summary = "Get the image bytes for a photo",
    description = "Serves the raw image regardless of which storage backend wrote it. Content-Type comes from the upload, falling back to a guess from the filename.",
    params(("id" = Uuid, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Image bytes"),
        (status = 404, description = "Photo or its bytes not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn photo_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let model = find_photo(&state.db, id).await?;

    let source = model
        .image_source()
        .ok_or_else(|| AppError::Internal(format!("photo {id} has no image source")))?;
    let bytes = state.images.load(&source).await?;

    let mime = match model.content_type {
        Some(ct) => ct,
        None => mime_guess::from_path(&model.filename)
            .first_or_octet_stream()
            .to_string(),
    };

    Response::builder()
        .header(header::CONTENT_TYPE, mime)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[utoipa::path(
    post,
    path = "/{id}/favorite",
    tag = "Photos",
    operation_id = "toggleFavorite",
    summary = "Toggle a photo's favorite flag",
    description = "Inverts the client's selection mark and returns the new value. The flip happens inside the store in a single statement, so two staggered toggles always land on opposite values.",
    params(("id" = Uuid, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "New favorite value", body = ToggleFavoriteResponse),
        (status = 404, description = "Photo not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleFavoriteResponse>, AppError> {
    // Negate in SQL rather than read-modify-write from here; truly
    // concurrent flips still race last-write-wins, which is fine for an
    // advisory flag.
    let result = photo::Entity::update_many()
        .col_expr(
            photo::Column::IsFavorite,
            Expr::col(photo::Column::IsFavorite).not(),
        )
        .filter(photo::Column::Id.eq(id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Photo not found".into()));
    }

    let model = find_photo(&state.db, id).await?;
    Ok(Json(ToggleFavoriteResponse {
        id: model.id,
        is_favorite: model.is_favorite,
    }))
}

/// Body limit layer for the photo upload route (32MB).
pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(32 * 1024 * 1024)
}

async fn find_photo<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<photo::Model, AppError> {
    photo::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".into()))
}
