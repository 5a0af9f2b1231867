#![cfg(test)]
use std::path::PathBuf;

use configs::DatabaseConfig;

use crate::BlobStore;

/// A store backed by a fresh SQLite file under the system temp dir.
pub struct TempStore {
    pub store: BlobStore,
    pub path: PathBuf,
}

impl TempStore {
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig { path: self.path.to_string_lossy().into_owned(), ..DatabaseConfig::default() }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Open (but do not initialize) a store on a unique temp file.
pub async fn open_temp() -> Result<TempStore, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("blob_store_{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig { path: path.to_string_lossy().into_owned(), ..DatabaseConfig::default() };
    let store = BlobStore::open(&cfg).await?;
    Ok(TempStore { store, path })
}

/// Open and initialize a store on a unique temp file.
pub async fn init_temp() -> Result<TempStore, anyhow::Error> {
    let t = open_temp().await?;
    t.store.ensure_initialized().await?;
    Ok(t)
}
