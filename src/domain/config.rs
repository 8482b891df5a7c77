//! Application configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default seconds to wait for the recorder to exit on stop before escalating
pub const DEFAULT_STOP_TIMEOUT_SECS: u64 = 30;

/// Default seconds to wait for a notification action button click
pub const DEFAULT_ACTION_TIMEOUT_SECS: u64 = 120;

/// Record command configuration
///
/// All fields are optional so that file, environment, and CLI layers can be
/// merged; later layers win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Force a specific recorder instead of auto-detecting by GPU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<String>,

    /// Where finished recordings are moved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recordings_dir: Option<PathBuf>,

    /// Capture audio by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,

    /// Seconds to wait for the recorder to exit on stop before force-killing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_timeout: Option<u64>,

    /// Seconds to wait for a notification action button click
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_timeout: Option<u64>,
}

impl RecordConfig {
    /// Config with nothing set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Config with documented defaults filled in
    pub fn defaults() -> Self {
        Self {
            recorder: None,
            recordings_dir: None,
            sound: Some(false),
            stop_timeout: Some(DEFAULT_STOP_TIMEOUT_SECS),
            action_timeout: Some(DEFAULT_ACTION_TIMEOUT_SECS),
        }
    }

    /// Merge another config over this one; `other`'s set fields win
    pub fn merge(mut self, other: Self) -> Self {
        if other.recorder.is_some() {
            self.recorder = other.recorder;
        }
        if other.recordings_dir.is_some() {
            self.recordings_dir = other.recordings_dir;
        }
        if other.sound.is_some() {
            self.sound = other.sound;
        }
        if other.stop_timeout.is_some() {
            self.stop_timeout = other.stop_timeout;
        }
        if other.action_timeout.is_some() {
            self.action_timeout = other.action_timeout;
        }
        self
    }

    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(false)
    }

    pub fn stop_timeout_or_default(&self) -> u64 {
        self.stop_timeout.unwrap_or(DEFAULT_STOP_TIMEOUT_SECS)
    }

    pub fn action_timeout_or_default(&self) -> u64 {
        self.action_timeout.unwrap_or(DEFAULT_ACTION_TIMEOUT_SECS)
    }
}
