//! Audio source port interface

use async_trait::async_trait;
use thiserror::Error;

/// Audio listing errors
#[derive(Debug, Clone, Error)]
pub enum AudioError {
    #[error("pactl not found")]
    PactlNotFound,

    #[error("Failed to list audio sources: {0}")]
    ListFailed(String),
}

/// Reported run state of a sound server source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Running,
    Idle,
    Other,
}

/// A sound server source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    pub name: String,
    pub state: SourceState,
}

/// Port for listing audio capture sources
#[async_trait]
pub trait AudioSources: Send + Sync {
    /// List available sources in the sound server's order
    async fn list(&self) -> Result<Vec<AudioSource>, AudioError>;
}

/// Pick the capture source: the first RUNNING one, else the first IDLE one.
pub fn pick_source(sources: &[AudioSource]) -> Option<&AudioSource> {
    sources
        .iter()
        .find(|s| s.state == SourceState::Running)
        .or_else(|| sources.iter().find(|s| s.state == SourceState::Idle))
}
