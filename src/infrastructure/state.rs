//! JSON file session store adapter

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{SessionStore, StateError};
use crate::domain::session::SessionDescriptor;

use super::paths::atomic_write_json;

/// Session descriptor persisted as a small JSON file
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> Result<Option<SessionDescriptor>, StateError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StateError::ReadFailed(e.to_string())),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StateError::ParseFailed(e.to_string()))
    }

    async fn save(&self, descriptor: &SessionDescriptor) -> Result<(), StateError> {
        let path = self.path.clone();
        let descriptor = descriptor.clone();

        tokio::task::spawn_blocking(move || atomic_write_json(&path, &descriptor))
            .await
            .map_err(|e| StateError::WriteFailed(e.to_string()))?
            .map_err(|e| StateError::WriteFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StateError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateError::WriteFailed(e.to_string())),
        }
    }
}
