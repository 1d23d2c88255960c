use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/projects", project_routes())
        .nest("/photos", photo_routes())
}

fn project_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::project::list_projects,
            handlers::project::upsert_project
        ))
        .routes(routes!(handlers::project::finance_summary))
        .routes(routes!(handlers::project::get_project))
        .merge(gallery_routes())
}

fn gallery_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::photo::list_photos,
            handlers::photo::upload_photo
        ))
        .layer(handlers::photo::upload_body_limit())
}

fn photo_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::photo::get_photo))
        .routes(routes!(handlers::photo::photo_content))
        .routes(routes!(handlers::photo::toggle_favorite))
}
