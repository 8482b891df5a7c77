//! Session descriptor persisted between the start and stop invocations
//!
//! Start and stop run in unrelated CLI processes; the only shared state is
//! this small file on disk plus the OS process table.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::recorder::RecorderKind;

/// On-disk record of an active recording session
///
/// Written atomically when the recorder is spawned and consumed by the stop
/// invocation to close the start notification and double-check liveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Which recorder binary was launched
    pub recorder: RecorderKind,
    /// Pid of the detached recorder process
    pub pid: u32,
    /// Id of the "Recording started" notification, if one was shown
    pub notification: Option<String>,
    /// When the recorder was spawned
    pub started_at: DateTime<Local>,
}

impl SessionDescriptor {
    pub fn new(recorder: RecorderKind, pid: u32, notification: Option<String>) -> Self {
        Self {
            recorder,
            pid,
            notification,
            started_at: Local::now(),
        }
    }
}
