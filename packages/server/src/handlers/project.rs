use axum::Json;
use axum::extract::{Path, State};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::instrument;

use crate::entity::project;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::project::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{email}",
    tag = "Projects",
    operation_id = "getProject",
    summary = "Look up a project by client email",
    description = "Returns the project for the given client email, including derived progress and balance. Lookup is exact and case-sensitive.",
    params(("email" = String, Path, description = "Client email address")),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 400, description = "Invalid email (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No project for this email (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ProjectResponse>, AppError> {
    let email = validate_email(&email)?;
    let model = find_project(&state.db, email).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List all projects",
    description = "Returns every project, most recently created first. Staff-facing; the client portal looks up a single email.",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let models = project::Entity::find()
        .order_by_desc(project::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Projects",
    operation_id = "upsertProject",
    summary = "Create or update a project",
    description = "Staff upsert keyed by client email: creates the project if the email is new, otherwise overwrites the supplied fields in place. Progress is derived from the stage name; an unrecognized stage is rejected with no write. Executed as a single atomic insert-or-update, so concurrent calls can never produce two rows for one email.",
    request_body = UpsertProjectRequest,
    responses(
        (status = 200, description = "Project created or updated", body = ProjectResponse),
        (status = 400, description = "Validation error or unknown stage (VALIDATION_ERROR, UNKNOWN_STAGE)", body = ErrorBody),
        (status = 503, description = "Store unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(client_email = %payload.client_email, status = %payload.status))]
pub async fn upsert_project(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpsertProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    validate_upsert_project(&payload)?;
    let email = validate_email(&payload.client_email)?.to_string();

    // Exact match only; a typo'd stage must never be displayed as 0%.
    let progress = state
        .stages
        .progress_for(&payload.status)
        .ok_or_else(|| AppError::UnknownStage(payload.status.clone()))?;

    let now = chrono::Utc::now();
    let new_project = project::ActiveModel {
        client_email: Set(email),
        project_name: Set(payload.project_name.trim().to_string()),
        status: Set(payload.status.clone()),
        progress: Set(progress),
        gallery_link: Set(payload.gallery_link.clone()),
        total_price: Set(payload.total_price),
        amount_paid: Set(payload.amount_paid),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    // Supplied fields replace; omitted optional fields stay as they were on
    // an existing row (and start NULL on first creation).
    let mut update_cols = vec![
        project::Column::ProjectName,
        project::Column::Status,
        project::Column::Progress,
        project::Column::UpdatedAt,
    ];
    if payload.gallery_link.is_some() {
        update_cols.push(project::Column::GalleryLink);
    }
    if payload.total_price.is_some() {
        update_cols.push(project::Column::TotalPrice);
    }
    if payload.amount_paid.is_some() {
        update_cols.push(project::Column::AmountPaid);
    }

    let model = project::Entity::insert(new_project)
        .on_conflict(
            OnConflict::column(project::Column::ClientEmail)
                .update_columns(update_cols)
                .to_owned(),
        )
        .exec_with_returning(&state.db)
        .await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "Finance",
    operation_id = "financeSummary",
    summary = "Revenue, collected and outstanding totals",
    description = "Aggregates total_price and amount_paid across all projects in decimal arithmetic, plus a per-project balance breakdown. Balances may be negative (overpayment).",
    responses(
        (status = 200, description = "Financial summary", body = FinanceSummaryResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn finance_summary(
    State(state): State<AppState>,
) -> Result<Json<FinanceSummaryResponse>, AppError> {
    let projects = project::Entity::find()
        .order_by_desc(project::Column::Id)
        .all(&state.db)
        .await?;

    let totals = crate::finance::aggregate(&projects);
    let items = projects.iter().map(ProjectBalanceItem::from).collect();

    Ok(Json(FinanceSummaryResponse {
        totals,
        projects: items,
    }))
}

pub(crate) async fn find_project<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<project::Model, AppError> {
    project::Entity::find()
        .filter(project::Column::ClientEmail.eq(email))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("No project found for this email".into()))
}
