//! pactl audio source adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioError, AudioSource, AudioSources, SourceState};

/// Source listing via `pactl list short sources`
///
/// Each line looks like `57  alsa_input.pci.analog-stereo  module  spec  RUNNING`;
/// the second field is the source name.
pub struct PactlAudioSources;

impl PactlAudioSources {
    pub fn new() -> Self {
        Self
    }

    fn parse_sources(output: &str) -> Vec<AudioSource> {
        output
            .lines()
            .filter_map(|line| {
                let name = line.split_whitespace().nth(1)?;
                let state = if line.contains("RUNNING") {
                    SourceState::Running
                } else if line.contains("IDLE") {
                    SourceState::Idle
                } else {
                    SourceState::Other
                };
                Some(AudioSource {
                    name: name.to_string(),
                    state,
                })
            })
            .collect()
    }
}

impl Default for PactlAudioSources {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSources for PactlAudioSources {
    async fn list(&self) -> Result<Vec<AudioSource>, AudioError> {
        let output = Command::new("pactl")
            .args(["list", "short", "sources"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AudioError::PactlNotFound
                } else {
                    AudioError::ListFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(AudioError::ListFailed(format!(
                "pactl exited with status: {}",
                output.status
            )));
        }

        Ok(Self::parse_sources(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}
