//! notify-send notification adapter
//!
//! Shells out to notify-send for showing notifications and to gdbus for
//! closing them. Plain notifications pass `--print-id` so the
//! daemon-assigned id comes back on stdout; action notifications must not,
//! since their stdout has to carry only the clicked action key.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::application::ports::{NotificationAction, NotificationId, Notifier, NotifyError};

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    pub fn new() -> Self {
        Self {
            app_name: "vela".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new("notify-send");
        command
            .args(["--app-name", &self.app_name])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        command
    }

    /// Command for an action notification: button flags, no `--print-id`
    fn action_command(&self, actions: &[NotificationAction]) -> Command {
        let mut command = self.command();
        for action in actions {
            command.arg(format!("--action={}={}", action.key, action.label));
        }
        command
    }
}

/// The clicked action key is the last non-empty stdout line; dismissal and
/// timeout print nothing.
fn parse_action(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(e: std::io::Error) -> NotifyError {
    if e.kind() == std::io::ErrorKind::NotFound {
        NotifyError::ClientNotFound
    } else {
        NotifyError::SendFailed(e.to_string())
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        persistent: bool,
    ) -> Result<NotificationId, NotifyError> {
        let mut command = self.command();
        command.arg("--print-id");
        if persistent {
            // never expire on its own; closed explicitly on stop
            command.args(["--expire-time", "0"]);
        }
        command.arg(summary).arg(body);

        let output = command.output().await.map_err(spawn_error)?;

        if !output.status.success() {
            return Err(NotifyError::SendFailed(format!(
                "notify-send exited with status: {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn request_action(
        &self,
        summary: &str,
        body: &str,
        actions: &[NotificationAction],
        wait: Duration,
    ) -> Result<Option<String>, NotifyError> {
        let mut command = self.action_command(actions);
        command.arg(summary).arg(body);

        // notify-send blocks until a button is clicked or the notification is
        // dismissed; bound the wait so a daemon without its own timeout
        // cannot stall the stop flow forever.
        let mut child = command.spawn().map_err(spawn_error)?;
        let mut stdout = child.stdout.take();

        let status = match timeout(wait, child.wait()).await {
            Ok(status) => status.map_err(|e| NotifyError::SendFailed(e.to_string()))?,
            Err(_) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Ok(None);
            }
        };

        if !status.success() {
            return Err(NotifyError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        let mut picked = String::new();
        if let Some(ref mut stdout) = stdout {
            let _ = stdout.read_to_string(&mut picked).await;
        }

        Ok(parse_action(&picked))
    }

    async fn close(&self, id: &str) {
        // Best-effort; a dead daemon or stale id is not worth surfacing
        let _ = Command::new("gdbus")
            .args([
                "call",
                "--session",
                "--dest=org.freedesktop.Notifications",
                "--object-path=/org/freedesktop/Notifications",
                "--method=org.freedesktop.Notifications.CloseNotification",
                id,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
    }
}
