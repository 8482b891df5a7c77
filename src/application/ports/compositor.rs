//! Compositor and region picker port interfaces

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// A compositor output as reported by the monitor query
///
/// Mirrors the fields of the compositor's JSON; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Monitor {
    pub name: String,
    #[serde(default)]
    pub focused: bool,
}

/// Compositor query errors
#[derive(Debug, Clone, Error)]
pub enum CompositorError {
    #[error("Failed to query monitors: {0}")]
    QueryFailed(String),

    #[error("Failed to parse monitor list: {0}")]
    ParseFailed(String),
}

/// Port for querying the compositor
#[async_trait]
pub trait Compositor: Send + Sync {
    /// List the compositor's outputs
    async fn monitors(&self) -> Result<Vec<Monitor>, CompositorError>;
}

/// Region picker errors
#[derive(Debug, Clone, Error)]
pub enum RegionPickError {
    #[error("slurp not found")]
    PickerNotFound,

    #[error("Region selection failed: {0}")]
    PickFailed(String),

    #[error("Region selection cancelled")]
    Cancelled,
}

/// Port for interactive region selection
#[async_trait]
pub trait RegionPicker: Send + Sync {
    /// Let the user draw a region; returns its geometry string, trimmed
    async fn pick(&self) -> Result<String, RegionPickError>;
}
