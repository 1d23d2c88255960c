use sea_orm::sea_query::{Index, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr};
use tracing::info;

use crate::entity::photo;

/// Ensure required database indexes exist.
///
/// Schema-sync creates the unique `client_email` constraint declared on the
/// project entity; the non-unique photo lookup index has to be created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Gallery listing: SELECT ... FROM photo WHERE client_email = ?
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_photo_client_email")
        .table(photo::Entity)
        .col(photo::Column::ClientEmail)
        .to_owned();

    let sql = match db.get_database_backend() {
        DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
        DbBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        _ => stmt.to_string(PostgresQueryBuilder),
    };

    match db.execute_unprepared(&sql).await {
        Ok(_) => {
            info!("Ensured index idx_photo_client_email exists");
        }
        Err(e) => {
            tracing::warn!("Failed to create index idx_photo_client_email: {}", e);
        }
    }

    Ok(())
}
