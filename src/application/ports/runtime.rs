//! Recorder process runtime port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recorder::{RecorderInvocation, RecorderKind};

/// Recorder process errors
#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    #[error("Failed to spawn {recorder}: {message}")]
    SpawnFailed {
        recorder: &'static str,
        message: String,
    },

    #[error("{tool} failed: {message}")]
    ToolFailed {
        tool: &'static str,
        message: String,
    },
}

/// Exit of a freshly spawned recorder inside the launch watch window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarlyExit {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured stderr of the dead process
    pub stderr: String,
}

impl EarlyExit {
    /// A zero exit is early but not a failure
    pub fn failed(&self) -> bool {
        self.code != Some(0)
    }
}

/// Port for spawning and controlling the detached recorder process
///
/// The spawned recorder must outlive the CLI invocation; stop runs in a
/// separate process and finds it through the process table.
#[async_trait]
pub trait RecorderRuntime: Send + Sync {
    /// Spawn the recorder detached from the controlling session.
    ///
    /// Returns the child's pid. Stderr is captured for early-exit reporting.
    async fn spawn(&self, invocation: &RecorderInvocation) -> Result<u32, RuntimeError>;

    /// Poll the just-spawned process `checks` times, `interval` apart, for an
    /// exit inside the window. `None` means it is still alive.
    async fn watch_early_exit(&self, checks: u32, interval: Duration) -> Option<EarlyExit>;

    /// Send a termination signal to all processes with the recorder's name.
    /// Best-effort.
    async fn terminate_by_name(&self, recorder: RecorderKind);

    /// Force-kill all processes with the recorder's name. Best-effort
    /// escalation when a recorder refuses to die.
    async fn force_kill(&self, recorder: RecorderKind);

    /// Whether any process with the recorder's name is alive
    async fn is_running(&self, recorder: RecorderKind) -> Result<bool, RuntimeError>;

    /// Whether a specific pid is alive
    fn pid_alive(&self, pid: u32) -> bool;
}
