

use sea_orm::DatabaseConnection;

pub(crate) async fn migrated_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}
