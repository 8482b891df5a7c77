//! Config store port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::RecordConfig;
use crate::domain::error::ConfigError;

/// Port for loading and saving configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the config; an absent file yields an empty config
    async fn load(&self) -> Result<RecordConfig, ConfigError>;

    /// Save the config, creating parent directories as needed
    async fn save(&self, config: &RecordConfig) -> Result<(), ConfigError>;

    /// Path of the config file
    fn path(&self) -> PathBuf;

    /// Whether the config file exists
    fn exists(&self) -> bool;

    /// Create the config file with defaults; fails if it already exists
    async fn init(&self) -> Result<(), ConfigError>;
}
