//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

use crate::domain::recorder::REGION_PICKER_SENTINEL;

/// Vela - screen recording toggle for Wayland desktops
#[derive(Parser, Debug)]
#[command(name = "vela")]
#[command(version)]
#[command(about = "Screen recording toggle for Wayland desktops")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toggle screen recording (start if idle, stop if recording)
    Record(RecordArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Record toggle options
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Capture region as "x,y WxH" geometry; pass the flag without a value
    /// to select interactively. Captures the focused monitor when absent.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = REGION_PICKER_SENTINEL,
        value_name = "GEOMETRY"
    )]
    pub region: Option<String>,

    /// Capture audio from the active source
    #[arg(short, long)]
    pub sound: bool,

    /// Recorder binary to use instead of auto-detection
    #[arg(long, value_name = "RECORDER")]
    pub recorder: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "recorder",
    "recordings_dir",
    "sound",
    "stop_timeout",
    "action_timeout",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
