//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, each wrapping
//! one of the external tools the record flow glues together.

pub mod audio;
pub mod compositor;
pub mod config;
pub mod launcher;
pub mod notification;
pub mod paths;
pub mod probe;
pub mod runtime;
pub mod state;

// Re-export adapters
pub use audio::PactlAudioSources;
pub use compositor::{HyprctlCompositor, SlurpRegionPicker};
pub use config::XdgConfigStore;
pub use launcher::{App2unitLauncher, DbusFileManager};
pub use notification::NotifySendNotifier;
pub use paths::{atomic_write_json, file_sha256, Paths};
pub use probe::LspciProbe;
pub use runtime::ShellRecorderRuntime;
pub use state::JsonSessionStore;
