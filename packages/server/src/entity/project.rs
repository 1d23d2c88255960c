use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Portal lookup key; at most one project per client.
    #[sea_orm(unique)]
    pub client_email: String,

    pub project_name: String,

    /// Exact stage name from the configured stage table.
    pub status: String,

    /// Completion percentage in [0,100], always derived from `status`.
    pub progress: i32,

    /// Final gallery URL, shown to the client once progress reaches 100.
    pub gallery_link: Option<String>,

    pub total_price: Option<Decimal>,
    pub amount_paid: Option<Decimal>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
