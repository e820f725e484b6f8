// SPDX-License-Identifier: MIT

//! Key/value settings backends standing in for the host platform's
//! settings facility. The pair store persists its whole binding sequence
//! as one opaque blob under a single key, so the surface here is minimal.

use crate::errors::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Opaque string settings, keyed by name. `set` commits immediately.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory settings for tests and demos.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettings {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed settings: one JSON object per file, rewritten on every
/// `set`. A missing file reads as empty settings.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl SettingsStore for FileSettings {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut all = self.read_all().await?;
        all.insert(key.to_string(), value);
        let serialized = serde_json::to_string_pretty(&all)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }
}
