//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod recorder;
pub mod session;

// Re-export common types
pub use config::RecordConfig;
pub use error::*;
pub use recorder::{CaptureRegion, RecorderInvocation, RecorderKind};
pub use session::SessionDescriptor;
