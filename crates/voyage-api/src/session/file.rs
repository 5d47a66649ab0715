//! File-backed token store

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::session::TokenStore;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Token store persisted as a small JSON file
///
/// Survives restarts; the file is removed when the token is cleared.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store writing to `path`, creating its parent directory
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create session directory: {:?}", parent))?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .context("Failed to read session file")?;

        let session: StoredSession =
            serde_json::from_str(&content).context("Failed to deserialize session file")?;

        Ok(Some(session.token))
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&StoredSession {
            token: token.to_string(),
        })
        .context("Failed to serialize session")?;

        fs::write(&self.path, json)
            .await
            .context("Failed to write session file")?;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .context("Failed to delete session file")?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/session.json");

        let store = FileTokenStore::new(&path).await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);

        store.set_token("jwt-token").await.unwrap();
        assert!(path.is_file());

        let reopened = FileTokenStore::new(&path).await.unwrap();
        assert_eq!(reopened.token().await.unwrap().as_deref(), Some("jwt-token"));
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::new(&path).await.unwrap();
        store.set_token("jwt-token").await.unwrap();
        store.clear().await.unwrap();

        assert!(!path.exists());
        assert_eq!(store.token().await.unwrap(), None);

        // clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path).await.unwrap();
        assert!(store.token().await.is_err());
    }
}
