pub mod interface;
pub(crate) mod migrations;
pub(crate) mod models;
pub mod store;

use migrations::Migrator;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

pub use store::SqlStore;

/// Connect to `database_url`, run migrations and hand back a store over the connection.
pub async fn connect(database_url: &str) -> Result<SqlStore, anyhow::Error> {
    connect_with(ConnectOptions::new(database_url)).await
}

pub async fn connect_with(options: ConnectOptions) -> Result<SqlStore, anyhow::Error> {
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    log::info!("Database connected and migrated");
    Ok(SqlStore::new(db))
}
