//! Recorder process runtime adapter
//!
//! Spawns the recorder in its own process group so it survives this CLI
//! exiting, and drives it through the process table afterwards: a later
//! invocation only knows the recorder by name and pid.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::application::ports::{EarlyExit, RecorderRuntime, RuntimeError};
use crate::domain::recorder::{RecorderInvocation, RecorderKind};

/// Shell-based recorder runtime (pkill/pidof for control and liveness)
pub struct ShellRecorderRuntime {
    /// The freshly spawned child, kept only for the launch watch window
    child: Arc<Mutex<Option<Child>>>,
}

impl ShellRecorderRuntime {
    pub fn new() -> Self {
        Self {
            child: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for ShellRecorderRuntime {
    fn default() -> Self {
        Self::new()
    }
}

async fn signal_by_name(binary: &str, force: bool) {
    let mut command = Command::new("pkill");
    if force {
        command.arg("-9");
    }
    let _ = command
        .arg(binary)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;
}

#[async_trait]
impl RecorderRuntime for ShellRecorderRuntime {
    async fn spawn(&self, invocation: &RecorderInvocation) -> Result<u32, RuntimeError> {
        let mut command = Command::new(invocation.recorder.binary());
        command
            .args(&invocation.args)
            .arg("-f")
            .arg(&invocation.output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        // Detach: the recorder must keep running after this process exits
        #[cfg(unix)]
        command.process_group(0);

        let child = command.spawn().map_err(|e| RuntimeError::SpawnFailed {
            recorder: invocation.recorder.binary(),
            message: e.to_string(),
        })?;

        let pid = child.id().ok_or_else(|| RuntimeError::SpawnFailed {
            recorder: invocation.recorder.binary(),
            message: "process exited before its pid could be read".to_string(),
        })?;

        *self.child.lock().await = Some(child);
        Ok(pid)
    }

    async fn watch_early_exit(&self, checks: u32, interval: Duration) -> Option<EarlyExit> {
        for _ in 0..checks {
            {
                let mut guard = self.child.lock().await;
                let child = guard.as_mut()?;

                if let Ok(Some(status)) = child.try_wait() {
                    let mut stderr = String::new();
                    if let Some(mut pipe) = child.stderr.take() {
                        let _ = pipe.read_to_string(&mut stderr).await;
                    }
                    *guard = None;
                    return Some(EarlyExit {
                        code: status.code(),
                        stderr: stderr.trim().to_string(),
                    });
                }
            }
            sleep(interval).await;
        }
        None
    }

    async fn terminate_by_name(&self, recorder: RecorderKind) {
        signal_by_name(recorder.binary(), false).await;
    }

    async fn force_kill(&self, recorder: RecorderKind) {
        signal_by_name(recorder.binary(), true).await;
    }

    async fn is_running(&self, recorder: RecorderKind) -> Result<bool, RuntimeError> {
        let status = Command::new("pidof")
            .arg(recorder.binary())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| RuntimeError::ToolFailed {
                tool: "pidof",
                message: e.to_string(),
            })?;

        Ok(status.success())
    }

    #[cfg(unix)]
    fn pid_alive(&self, pid: u32) -> bool {
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        // Signal 0: existence check only
        kill(Pid::from_raw(pid as i32), None).is_ok()
    }

    #[cfg(not(unix))]
    fn pid_alive(&self, _pid: u32) -> bool {
        false
    }
}
