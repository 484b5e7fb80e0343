/// Schema-level behaviour: relations, cascades and uniqueness
pub mod relation_tests;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Fresh in-memory database with every migration applied
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
