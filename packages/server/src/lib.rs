pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod finance;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod stage;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use common::storage::ImageStore;
use common::storage::filesystem::FilesystemImageStore;
use common::storage::inline::InlineImageStore;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, StorageConfig, StorageMode};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Studio Client Portal API",
        version = "1.0.0",
        description = "Project status, gallery photos and balances for photography clients"
    ),
    tags(
        (name = "Projects", description = "Client lookup and staff create-or-update"),
        (name = "Photos", description = "Gallery uploads and favorite selection"),
        (name = "Finance", description = "Revenue, collected and outstanding balances"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}

/// Construct the image storage backend named by the config.
pub async fn image_store_from_config(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn ImageStore>> {
    let store: Arc<dyn ImageStore> = match cfg.mode {
        StorageMode::Inline => Arc::new(InlineImageStore::new(cfg.max_image_bytes)),
        StorageMode::Filesystem => Arc::new(
            FilesystemImageStore::new(cfg.media_dir.clone(), cfg.max_image_bytes).await?,
        ),
    };
    Ok(store)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = &config.server.cors;
    let origins: Vec<HeaderValue> = cors
        .allow_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age))
}
