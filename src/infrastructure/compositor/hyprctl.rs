//! Hyprland compositor adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Compositor, CompositorError, Monitor};

/// Monitor queries via `hyprctl monitors -j`
pub struct HyprctlCompositor;

impl HyprctlCompositor {
    pub fn new() -> Self {
        Self
    }

    fn parse_monitors(json: &str) -> Result<Vec<Monitor>, CompositorError> {
        serde_json::from_str(json).map_err(|e| CompositorError::ParseFailed(e.to_string()))
    }
}

impl Default for HyprctlCompositor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Compositor for HyprctlCompositor {
    async fn monitors(&self) -> Result<Vec<Monitor>, CompositorError> {
        let output = Command::new("hyprctl")
            .args(["monitors", "-j"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| CompositorError::QueryFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(CompositorError::QueryFailed(format!(
                "hyprctl exited with status: {}",
                output.status
            )));
        }

        Self::parse_monitors(&String::from_utf8_lossy(&output.stdout))
    }
}
