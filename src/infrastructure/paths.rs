//! Path registry
//!
//! Resolves XDG base directories once at startup into an explicit struct
//! that gets threaded through the rest of the program, plus small file
//! helpers shared by the state and config stores.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

/// Resolved per-user directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// `<XDG_CONFIG_HOME>/vela`
    pub config_dir: PathBuf,
    /// `<XDG_STATE_HOME>/vela`
    pub state_dir: PathBuf,
    /// `<XDG_CACHE_HOME>/vela`
    pub cache_dir: PathBuf,
    /// Where finished recordings land
    pub recordings_dir: PathBuf,
}

impl Paths {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self::resolve(&home, |name| env::var_os(name))
    }

    /// Resolve against an explicit home and environment lookup; the
    /// injection point for tests
    pub fn resolve(home: &Path, var: impl Fn(&str) -> Option<OsString>) -> Self {
        let base = |name: &str, fallback: &str| {
            var(name)
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join(fallback))
        };

        let videos = base("XDG_VIDEOS_DIR", "Videos");
        let recordings_dir = var("VELA_RECORDINGS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| videos.join("Recordings"));

        Self {
            config_dir: base("XDG_CONFIG_HOME", ".config").join("vela"),
            state_dir: base("XDG_STATE_HOME", ".local/state").join("vela"),
            cache_dir: base("XDG_CACHE_HOME", ".cache").join("vela"),
            recordings_dir,
        }
    }

    /// In-progress recording file
    pub fn recording_path(&self) -> PathBuf {
        self.state_dir.join("record/recording.mp4")
    }

    /// Session descriptor file
    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join("record/session.json")
    }

    /// Record config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("record.toml")
    }
}

/// Serialize a value as JSON and write it atomically: the content goes to a
/// temp file in the destination directory first and is renamed into place.
pub fn atomic_write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    serde_json::to_writer(&mut file, value).map_err(io::Error::other)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Streaming SHA-256 of a file, as a lowercase hex digest
pub fn file_sha256(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
