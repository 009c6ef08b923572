use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use shopdesk_migration::{Migrator, MigratorTrait};
use tracing::info;

/// Connect to the store and bring the schema up to date.
///
/// Tables are created on first start; later starts only apply migrations that
/// have not run yet.
pub async fn init_pool_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(max_connections, "database connected");

    Migrator::up(&db, None).await?;
    info!("database migrations applied");

    Ok(db)
}

/// A fresh, migrated in-memory SQLite store. Pinned to one connection because
/// every SQLite `:memory:` connection is a separate database.
pub async fn in_memory() -> anyhow::Result<DatabaseConnection> {
    init_pool_and_migrate("sqlite::memory:", 1).await
}
