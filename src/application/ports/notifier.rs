//! Notification port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("notify-send not found")]
    ClientNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Opaque notification id as printed by the notification client
pub type NotificationId = String;

/// An action button offered on a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationAction {
    /// Key reported back when the button is clicked
    pub key: &'static str,
    /// Button label shown to the user
    pub label: &'static str,
}

/// Port for desktop notifications
///
/// The record flow talks to the user exclusively through this port; stderr
/// only carries diagnostics.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification and return the id the client printed.
    ///
    /// `persistent` notifications do not expire on their own; the start
    /// notification stays up until the stop invocation closes it.
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        persistent: bool,
    ) -> Result<NotificationId, NotifyError>;

    /// Show a notification with action buttons and block until the user
    /// clicks one, the notification is dismissed, or `timeout` elapses.
    ///
    /// Returns the clicked action's key, or `None` for dismissal/timeout.
    async fn request_action(
        &self,
        summary: &str,
        body: &str,
        actions: &[NotificationAction],
        timeout: Duration,
    ) -> Result<Option<String>, NotifyError>;

    /// Ask the notification daemon to close a notification by id.
    ///
    /// Best-effort; failures are swallowed.
    async fn close(&self, id: &str);
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        persistent: bool,
    ) -> Result<NotificationId, NotifyError> {
        self.as_ref().notify(summary, body, persistent).await
    }

    async fn request_action(
        &self,
        summary: &str,
        body: &str,
        actions: &[NotificationAction],
        timeout: Duration,
    ) -> Result<Option<String>, NotifyError> {
        self.as_ref()
            .request_action(summary, body, actions, timeout)
            .await
    }

    async fn close(&self, id: &str) {
        self.as_ref().close(id).await
    }
}
