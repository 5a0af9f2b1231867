//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the directory holding the database file exists.
///
/// A bare file name (no parent component) needs nothing created.
pub async fn ensure_data_dir(db_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_ok() {
        return Ok(());
    }
    warn!(data_dir = %parent.display(), "data directory missing; creating it");
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(data_dir = %parent.display(), "data directory created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("blob_env_{}", uuid::Uuid::new_v4()));
        let db = root.join("nested").join("single.db");
        ensure_data_dir(&db).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());
        // second call is a no-op
        ensure_data_dir(&db).await?;
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_dir() -> anyhow::Result<()> {
        ensure_data_dir(Path::new("single.db")).await
    }
}
