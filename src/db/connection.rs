use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::entities::prelude::{Item, StorageBox};

/// Opens the pool and syncs the schema from the entities.
/// sqlx's SQLite options turn on `foreign_keys` and a 5 s busy timeout for
/// every pooled connection, so no per-connection pragmas are issued here.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    info!("syncing database schema from entities");
    db.get_schema_builder()
        .register(StorageBox)
        .register(Item)
        .sync(&db)
        .await?;
    Ok(db)
}
