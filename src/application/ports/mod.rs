//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers. Every external tool the record flow
//! touches sits behind one of them.

pub mod audio;
pub mod compositor;
pub mod config;
pub mod launcher;
pub mod notifier;
pub mod probe;
pub mod runtime;
pub mod state;

// Re-export common types
pub use audio::{pick_source, AudioError, AudioSource, AudioSources, SourceState};
pub use compositor::{Compositor, CompositorError, Monitor, RegionPickError, RegionPicker};
pub use config::ConfigStore;
pub use launcher::{FileManager, LaunchError, Launcher, RevealError};
pub use notifier::{NotificationAction, NotificationId, Notifier, NotifyError};
pub use probe::{ProbeError, SystemProbe};
pub use runtime::{EarlyExit, RecorderRuntime, RuntimeError};
pub use state::{SessionStore, StateError};
