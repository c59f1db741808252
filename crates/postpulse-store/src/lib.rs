//! File-backed persistence for processed pipeline output.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_OUTPUT_PATH: &str = "processed_posts.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("write to {path} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Writes `value` as indented JSON, replacing any previous content.
    async fn put_json(&self, value: &Value) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

#[async_trait]
impl ResultStore for JsonFileStore {
    async fn put_json(&self, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), "wrote pipeline output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn writes_indented_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("out.json"));

        store
            .put_json(&json!([{ "original": "a" }]))
            .await
            .expect("store");

        let written = std::fs::read_to_string(store.path()).expect("read back");
        assert!(written.contains('\n'), "output should be indented");
        let parsed: Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed[0]["original"], "a");
    }

    #[tokio::test]
    async fn second_write_replaces_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("out.json"));

        store.put_json(&json!(["first"])).await.expect("store");
        store.put_json(&json!(["second"])).await.expect("store");

        let written = std::fs::read_to_string(store.path()).expect("read back");
        let parsed: Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed, json!(["second"]));
    }

    #[tokio::test]
    async fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("out.json"));

        let err = store.put_json(&json!([])).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
