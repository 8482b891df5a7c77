//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod record;
pub mod select;

// Re-export use cases
pub use record::{
    RecordDeps, RecordError, RecordInput, RecordOutcome, RecordSessionUseCase, RecordSettings,
};
pub use select::{select_recorder, SelectError};
