//! lspci system probe adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProbeError, SystemProbe};

/// GPU detection via `lspci`, binary lookup via PATH
pub struct LspciProbe;

impl LspciProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LspciProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for LspciProbe {
    async fn pci_devices(&self) -> Result<String, ProbeError> {
        let output = Command::new("lspci")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| ProbeError::ExecFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(ProbeError::QueryFailed(output.status.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn binary_installed(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}
