//! slurp region picker adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{RegionPickError, RegionPicker};

/// Interactive region selection via slurp
pub struct SlurpRegionPicker;

impl SlurpRegionPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SlurpRegionPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionPicker for SlurpRegionPicker {
    async fn pick(&self) -> Result<String, RegionPickError> {
        let output = Command::new("slurp")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RegionPickError::PickerNotFound
                } else {
                    RegionPickError::PickFailed(e.to_string())
                }
            })?;

        // slurp exits non-zero when the selection is escaped
        if !output.status.success() {
            return Err(RegionPickError::Cancelled);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
