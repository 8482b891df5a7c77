//! Default-handler launcher and file manager adapters

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileManager, LaunchError, Launcher, RevealError};

/// Opens paths with the desktop's default handler via app2unit
pub struct App2unitLauncher;

impl App2unitLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for App2unitLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Launcher for App2unitLauncher {
    async fn open_detached(&self, path: &Path) -> Result<(), LaunchError> {
        let mut command = Command::new("app2unit");
        command
            .arg("-O")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The viewer outlives this short-lived CLI
        #[cfg(unix)]
        command.process_group(0);

        command.spawn().map_err(|e| LaunchError::LaunchFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

/// Reveals files via the org.freedesktop.FileManager1 D-Bus interface
pub struct DbusFileManager;

impl DbusFileManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DbusFileManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileManager for DbusFileManager {
    async fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        let status = Command::new("dbus-send")
            .args([
                "--session",
                "--dest=org.freedesktop.FileManager1",
                "--type=method_call",
                "/org/freedesktop/FileManager1",
                "org.freedesktop.FileManager1.ShowItems",
                &format!("array:string:file://{}", path.display()),
                "string:",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| RevealError::RevealFailed(e.to_string()))?;

        if !status.success() {
            return Err(RevealError::RevealFailed(format!(
                "dbus-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
