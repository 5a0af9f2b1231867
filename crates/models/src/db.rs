use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open the SQLite file described by `cfg`.
///
/// The pool holds a single connection so every statement against the file
/// is serialized by sqlx itself.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let timeout = Duration::from_secs(cfg.timeout_secs);
    let mut opts = ConnectOptions::new(cfg.url());
    opts.max_connections(1)
        .min_connections(1)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(path = %cfg.path, event = "db_connected", "connected to sqlite database");
    Ok(db)
}
