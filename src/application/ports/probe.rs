//! System probe port interface

use async_trait::async_trait;
use thiserror::Error;

/// GPU query errors
///
/// The two variants are handled differently by recorder selection: a query
/// that ran but exited non-zero triggers the silent fallback, while a query
/// that could not be executed at all propagates.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("PCI query exited with status {0}")]
    QueryFailed(String),

    #[error("Failed to run PCI query: {0}")]
    ExecFailed(String),
}

/// Port for inspecting the host system
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Raw output of the PCI device lister
    async fn pci_devices(&self) -> Result<String, ProbeError>;

    /// Whether a binary is installed on PATH
    fn binary_installed(&self, name: &str) -> bool;
}
