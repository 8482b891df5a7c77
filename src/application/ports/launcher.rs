//! Default-handler launcher and file manager port interfaces

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Launcher errors
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    #[error("Failed to launch handler for {path}: {message}")]
    LaunchFailed { path: String, message: String },
}

/// File manager reveal errors
#[derive(Debug, Clone, Error)]
pub enum RevealError {
    #[error("File manager reveal failed: {0}")]
    RevealFailed(String),
}

/// Port for opening files with the desktop's default handler
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Open a path with its default handler, detached from this process
    async fn open_detached(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Port for revealing a file in the desktop's file manager
#[async_trait]
pub trait FileManager: Send + Sync {
    /// Ask the file manager to show the item; errors when the call fails so
    /// the caller can fall back to opening the parent directory
    async fn reveal(&self, path: &Path) -> Result<(), RevealError>;
}
