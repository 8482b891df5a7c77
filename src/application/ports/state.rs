//! Session state store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::SessionDescriptor;

/// Session state errors
///
/// A missing state file is not an error; `load` reports it as `None`.
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("Failed to read session state: {0}")]
    ReadFailed(String),

    #[error("Failed to parse session state: {0}")]
    ParseFailed(String),

    #[error("Failed to write session state: {0}")]
    WriteFailed(String),
}

/// Port for persisting the session descriptor between invocations
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the descriptor; `None` when no session file exists
    async fn load(&self) -> Result<Option<SessionDescriptor>, StateError>;

    /// Write the descriptor atomically
    async fn save(&self, descriptor: &SessionDescriptor) -> Result<(), StateError>;

    /// Remove the descriptor; removing a missing file is fine
    async fn clear(&self) -> Result<(), StateError>;
}
