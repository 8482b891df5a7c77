//! Recorder identity and invocation building

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidRecorderError;

/// The interactive-region sentinel accepted by `--region`
pub const REGION_PICKER_SENTINEL: &str = "slurp";

/// Supported screen recorder binaries
///
/// Selected once per invocation and immutable afterwards. The two recorders
/// take the same region/output flags but differ in audio flag syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecorderKind {
    WlScreenrec,
    WfRecorder,
}

impl RecorderKind {
    /// The binary name to spawn and match against the process table
    pub const fn binary(&self) -> &'static str {
        match self {
            Self::WlScreenrec => "wl-screenrec",
            Self::WfRecorder => "wf-recorder",
        }
    }

    /// Build the audio capture flags for a PulseAudio source name.
    ///
    /// wf-recorder takes a single `--audio=<source>` flag; wl-screenrec
    /// wants `--audio --audio-device <source>`.
    pub fn audio_args(&self, source: &str) -> Vec<String> {
        match self {
            Self::WfRecorder => vec![format!("--audio={}", source)],
            Self::WlScreenrec => vec![
                "--audio".to_string(),
                "--audio-device".to_string(),
                source.to_string(),
            ],
        }
    }
}

impl fmt::Display for RecorderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for RecorderKind {
    type Err = InvalidRecorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wl-screenrec" => Ok(Self::WlScreenrec),
            "wf-recorder" => Ok(Self::WfRecorder),
            other => Err(InvalidRecorderError {
                input: other.to_string(),
            }),
        }
    }
}

/// What part of the screen to capture
///
/// Exactly one variant is active per recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureRegion {
    /// Explicit `x,y WxH` geometry, user-supplied or from the region picker
    Geometry(String),
    /// An entire monitor, identified by its compositor output name
    Output(String),
}

impl CaptureRegion {
    /// Recorder flags for this region
    pub fn args(&self) -> [String; 2] {
        match self {
            Self::Geometry(geometry) => ["-g".to_string(), geometry.clone()],
            Self::Output(name) => ["-o".to_string(), name.clone()],
        }
    }
}

/// A fully assembled recorder command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderInvocation {
    pub recorder: RecorderKind,
    /// Region and audio flags, in order
    pub args: Vec<String>,
    /// In-progress output file, passed as `-f <path>`
    pub output: PathBuf,
}

impl RecorderInvocation {
    pub fn new(recorder: RecorderKind, output: PathBuf) -> Self {
        Self {
            recorder,
            args: Vec::new(),
            output,
        }
    }

    pub fn region(mut self, region: &CaptureRegion) -> Self {
        self.args.extend(region.args());
        self
    }

    pub fn audio(mut self, source: &str) -> Self {
        self.args.extend(self.recorder.audio_args(source));
        self
    }
}
