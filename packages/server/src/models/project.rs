use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::project;
use crate::error::AppError;
use crate::finance::{self, FinanceTotals};

pub use super::shared::validate_email;

/// Staff-initiated create-or-update of a project, keyed by client email.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpsertProjectRequest {
    pub client_email: String,
    pub project_name: String,
    /// Exact stage name from the configured vocabulary.
    #[schema(example = "Post-Production")]
    pub status: String,
    /// Replaces the stored link when supplied; left unchanged when omitted.
    pub gallery_link: Option<String>,
    pub total_price: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub client_email: String,
    pub project_name: String,
    pub status: String,
    pub progress: i32,
    pub gallery_link: Option<String>,
    pub total_price: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
    /// Outstanding balance; negative when the client has overpaid.
    pub balance_due: Decimal,
    /// True once the project has reached its final stage and the client
    /// should see the "collection ready" view instead of progress.
    pub delivered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<project::Model> for ProjectResponse {
    fn from(m: project::Model) -> Self {
        let balance_due = finance::balance_due(&m);
        Self {
            id: m.id,
            delivered: m.progress >= 100,
            balance_due,
            client_email: m.client_email,
            project_name: m.project_name,
            status: m.status,
            progress: m.progress,
            gallery_link: m.gallery_link,
            total_price: m.total_price,
            amount_paid: m.amount_paid,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Per-project line of the finance summary.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProjectBalanceItem {
    pub client_email: String,
    pub project_name: String,
    pub total_price: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
    pub balance_due: Decimal,
}

impl From<&project::Model> for ProjectBalanceItem {
    fn from(m: &project::Model) -> Self {
        Self {
            client_email: m.client_email.clone(),
            project_name: m.project_name.clone(),
            total_price: m.total_price,
            amount_paid: m.amount_paid,
            balance_due: finance::balance_due(m),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FinanceSummaryResponse {
    pub totals: FinanceTotals,
    pub projects: Vec<ProjectBalanceItem>,
}

pub fn validate_upsert_project(req: &UpsertProjectRequest) -> Result<(), AppError> {
    validate_email(&req.client_email)?;
    let name = req.project_name.trim();
    if name.is_empty() || name.chars().count() > 256 {
        return Err(AppError::Validation(
            "Project name must be 1-256 characters".into(),
        ));
    }
    if let Some(ref link) = req.gallery_link
        && link.len() > 2048
    {
        return Err(AppError::Validation(
            "Gallery link must be at most 2048 characters".into(),
        ));
    }
    Ok(())
}
