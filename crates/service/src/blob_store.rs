use std::{future::Future, sync::Arc, time::Duration};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::{errors::ModelError, file_record};
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;

/// Durable store for the single `file` record.
///
/// Every operation takes the same async mutex and runs under `timeout`, so
/// reads never observe a half-applied write and no call waits forever on a
/// stuck disk. Concurrent writers race; whichever commits last wins.
#[derive(Clone)]
pub struct BlobStore {
    db: DatabaseConnection,
    lock: Arc<Mutex<()>>,
    timeout: Duration,
}

impl BlobStore {
    /// Open the SQLite file described by `cfg`. Does not touch the schema.
    pub async fn open(cfg: &DatabaseConfig) -> Result<Self, ServiceError> {
        let db = models::db::connect_with_config(cfg)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Self::from_connection(db, Duration::from_secs(cfg.timeout_secs)))
    }

    pub fn from_connection(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, lock: Arc::new(Mutex::new(())), timeout }
    }

    /// Create the table and the empty record if either is missing.
    ///
    /// Safe to call repeatedly; existing content is never touched.
    #[instrument(skip(self))]
    pub async fn ensure_initialized(&self) -> Result<(), ServiceError> {
        let db = &self.db;
        let inserted = self
            .guarded("ensure_initialized", async move {
                migration::Migrator::up(db, None).await?;
                Ok::<bool, ModelError>(file_record::insert_default(db).await?)
            })
            .await?;
        if inserted {
            info!(event = "default_row_inserted", "inserted default row");
        }
        Ok(())
    }

    /// Current record. `NotFound` means initialization never ran.
    pub async fn get(&self) -> Result<file_record::Model, ServiceError> {
        self.guarded("get", file_record::find(&self.db))
            .await?
            .ok_or_else(|| ServiceError::not_found("record"))
    }

    /// Overwrite the content unconditionally.
    pub async fn replace(&self, content: &str) -> Result<(), ServiceError> {
        self.guarded("replace", file_record::upsert(&self.db, content)).await
    }

    /// Empty the content; the row itself stays.
    pub async fn clear(&self) -> Result<(), ServiceError> {
        self.guarded("clear", file_record::upsert(&self.db, "")).await
    }

    /// Close the underlying pool. Other clones become unusable afterwards.
    pub async fn close(self) -> Result<(), ServiceError> {
        self.db.close().await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn guarded<T, F>(&self, op: &'static str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ModelError>>,
    {
        let lock = &self.lock;
        let run = async move {
            let _guard = lock.lock().await;
            fut.await
        };
        match tokio::time::timeout(self.timeout, run).await {
            Ok(res) => res.map_err(ServiceError::from),
            Err(_) => {
                warn!(op, timeout_ms = self.timeout.as_millis() as u64, "storage call timed out");
                Err(ServiceError::Timeout(self.timeout))
            }
        }
    }
}
