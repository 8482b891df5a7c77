//! Recording session use case
//!
//! The record toggle is a two-phase session: start and stop run in unrelated
//! CLI invocations that share only the session descriptor on disk and the OS
//! process table. Start spawns the detached recorder and watches it briefly
//! for an immediate crash; stop terminates it, waits for the file to be
//! finalized, relocates it, and offers follow-up actions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use thiserror::Error;
use tokio::fs;
use tokio::time::sleep;

use crate::domain::recorder::{
    CaptureRegion, RecorderInvocation, RecorderKind, REGION_PICKER_SENTINEL,
};
use crate::domain::session::SessionDescriptor;

use super::ports::{
    pick_source, AudioError, AudioSources, Compositor, CompositorError, FileManager, LaunchError,
    Launcher, NotificationAction, Notifier, NotifyError, RecorderRuntime, RegionPickError,
    RegionPicker, RuntimeError, SessionStore, StateError, SystemProbe,
};
use super::select::{select_recorder, SelectError};

/// Number of early-exit checks after spawning the recorder
const LAUNCH_CHECKS: u32 = 5;

/// Interval between early-exit checks
const LAUNCH_CHECK_INTERVAL: Duration = Duration::from_millis(200);

/// Interval between liveness polls while waiting for the recorder to exit
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Grace period after a force-kill before giving up the wait
const FORCE_KILL_GRACE: Duration = Duration::from_secs(2);

/// Action buttons on the completion notification
const STOP_ACTIONS: [NotificationAction; 3] = [
    NotificationAction {
        key: "watch",
        label: "Watch",
    },
    NotificationAction {
        key: "open",
        label: "Open",
    },
    NotificationAction {
        key: "delete",
        label: "Delete",
    },
];

/// Errors from the record use case
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("No focused monitor found")]
    NoFocusedMonitor,

    #[error("No audio source found")]
    NoAudioSource,

    #[error(transparent)]
    Compositor(#[from] CompositorError),

    #[error(transparent)]
    RegionPick(#[from] RegionPickError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RecordError {
    fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }
}

/// Per-invocation record options
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    /// Explicit geometry, or the interactive sentinel; `None` captures the
    /// focused monitor
    pub region: Option<String>,
    /// Capture audio
    pub sound: bool,
}

/// Paths and timeouts the session controller works with, built once at startup
#[derive(Debug, Clone)]
pub struct RecordSettings {
    /// In-progress recording file
    pub recording_path: PathBuf,
    /// Directory finished recordings are moved into
    pub recordings_dir: PathBuf,
    /// Force a recorder instead of detecting one
    pub recorder_override: Option<RecorderKind>,
    /// How long stop waits for the recorder to exit before force-killing
    pub stop_timeout: Duration,
    /// How long the completion notification waits for an action click
    pub action_timeout: Duration,
}

/// What a toggle invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Recorder spawned and still alive after the watch window
    Started { recorder: RecorderKind },
    /// Recorder died inside the watch window; reported via notification
    StartFailed { stderr: String },
    /// Session stopped and the recording relocated
    Stopped {
        path: PathBuf,
        action: Option<String>,
    },
}

/// External collaborators of the session controller
pub struct RecordDeps {
    pub probe: Box<dyn SystemProbe>,
    pub compositor: Box<dyn Compositor>,
    pub picker: Box<dyn RegionPicker>,
    pub audio: Box<dyn AudioSources>,
    pub notifier: Box<dyn Notifier>,
    pub runtime: Box<dyn RecorderRuntime>,
    pub launcher: Box<dyn Launcher>,
    pub file_manager: Box<dyn FileManager>,
    pub store: Box<dyn SessionStore>,
}

/// Recording session controller
pub struct RecordSessionUseCase {
    deps: RecordDeps,
    settings: RecordSettings,
}

impl RecordSessionUseCase {
    pub fn new(deps: RecordDeps, settings: RecordSettings) -> Self {
        Self { deps, settings }
    }

    /// Toggle recording: stop the active session if one is running, start one
    /// otherwise.
    pub async fn toggle(&self, input: RecordInput) -> Result<RecordOutcome, RecordError> {
        let recorder = match self.settings.recorder_override {
            Some(recorder) => recorder,
            None => select_recorder(self.deps.probe.as_ref()).await?,
        };

        if self.session_active(recorder).await? {
            self.stop(recorder).await
        } else {
            self.start(recorder, input).await
        }
    }

    /// Detect whether a session is active.
    ///
    /// The descriptor pid is checked first; the process table by name is the
    /// fallback, since the recorder outlives the invocation that wrote the
    /// descriptor and the descriptor may be gone or stale. Descriptor read
    /// errors are swallowed here on purpose: detection has to keep working
    /// with a corrupt descriptor, or the toggle could never reach the stop
    /// path that clears it.
    async fn session_active(&self, recorder: RecorderKind) -> Result<bool, RecordError> {
        if let Ok(Some(descriptor)) = self.deps.store.load().await {
            if descriptor.recorder == recorder && self.deps.runtime.pid_alive(descriptor.pid) {
                return Ok(true);
            }
        }

        Ok(self.deps.runtime.is_running(recorder).await?)
    }

    async fn start(
        &self,
        recorder: RecorderKind,
        input: RecordInput,
    ) -> Result<RecordOutcome, RecordError> {
        let region = self.capture_region(input.region.as_deref()).await?;

        let mut invocation =
            RecorderInvocation::new(recorder, self.settings.recording_path.clone()).region(&region);

        if input.sound {
            let sources = self.deps.audio.list().await?;
            let source = pick_source(&sources).ok_or(RecordError::NoAudioSource)?;
            invocation = invocation.audio(&source.name);
        }

        if let Some(parent) = self.settings.recording_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(RecordError::io(format!(
                    "Failed to create {}",
                    parent.display()
                )))?;
        }

        let pid = self.deps.runtime.spawn(&invocation).await?;

        let notification = self
            .deps
            .notifier
            .notify("Recording started", "Recording...", true)
            .await?;

        self.deps
            .store
            .save(&SessionDescriptor::new(
                recorder,
                pid,
                Some(notification.clone()),
            ))
            .await?;

        if let Some(exit) = self
            .deps
            .runtime
            .watch_early_exit(LAUNCH_CHECKS, LAUNCH_CHECK_INTERVAL)
            .await
        {
            if exit.failed() {
                self.deps.notifier.close(&notification).await;
                self.deps
                    .notifier
                    .notify(
                        "Recording failed",
                        &format!("Recording error: {}", exit.stderr),
                        false,
                    )
                    .await?;

                // Roll back the partial spawn so the next start is clean
                let _ = fs::remove_file(&self.settings.recording_path).await;
                let _ = self.deps.store.clear().await;

                return Ok(RecordOutcome::StartFailed {
                    stderr: exit.stderr,
                });
            }
        }

        Ok(RecordOutcome::Started { recorder })
    }

    /// Resolve what to capture from the region argument.
    async fn capture_region(&self, region: Option<&str>) -> Result<CaptureRegion, RecordError> {
        match region {
            Some(REGION_PICKER_SENTINEL) => {
                let geometry = self.deps.picker.pick().await?;
                Ok(CaptureRegion::Geometry(geometry.trim().to_string()))
            }
            Some(geometry) => Ok(CaptureRegion::Geometry(geometry.trim().to_string())),
            None => {
                let monitors = self.deps.compositor.monitors().await?;
                let focused = monitors
                    .into_iter()
                    .find(|monitor| monitor.focused)
                    .ok_or(RecordError::NoFocusedMonitor)?;
                Ok(CaptureRegion::Output(focused.name))
            }
        }
    }

    async fn stop(&self, recorder: RecorderKind) -> Result<RecordOutcome, RecordError> {
        self.deps.runtime.terminate_by_name(recorder).await;

        // Wait for the recorder to finalize the file; killing mid-write
        // truncates the video.
        if !self.wait_for_exit(recorder, self.settings.stop_timeout).await? {
            self.deps.runtime.force_kill(recorder).await;
            self.wait_for_exit(recorder, FORCE_KILL_GRACE).await?;
        }

        let final_path = self.settings.recordings_dir.join(format!(
            "recording_{}.mp4",
            Local::now().format("%Y%m%d_%H-%M-%S")
        ));

        fs::create_dir_all(&self.settings.recordings_dir)
            .await
            .map_err(RecordError::io(format!(
                "Failed to create {}",
                self.settings.recordings_dir.display()
            )))?;

        move_file(&self.settings.recording_path, &final_path)
            .await
            .map_err(RecordError::io(format!(
                "Failed to move recording to {}",
                final_path.display()
            )))?;

        // Close the start notification; a missing descriptor is tolerated,
        // anything else propagates.
        if let Some(descriptor) = self.deps.store.load().await? {
            if let Some(id) = descriptor.notification {
                self.deps.notifier.close(&id).await;
            }
        }
        self.deps.store.clear().await?;

        let action = self
            .deps
            .notifier
            .request_action(
                "Recording stopped",
                &format!("Recording saved in {}", final_path.display()),
                &STOP_ACTIONS,
                self.settings.action_timeout,
            )
            .await?;

        match action.as_deref() {
            Some("watch") => self.deps.launcher.open_detached(&final_path).await?,
            Some("open") => {
                if self.deps.file_manager.reveal(&final_path).await.is_err() {
                    if let Some(parent) = final_path.parent() {
                        self.deps.launcher.open_detached(parent).await?;
                    }
                }
            }
            Some("delete") => {
                fs::remove_file(&final_path)
                    .await
                    .map_err(RecordError::io(format!(
                        "Failed to delete {}",
                        final_path.display()
                    )))?;
            }
            _ => {}
        }

        Ok(RecordOutcome::Stopped {
            path: final_path,
            action,
        })
    }

    /// Poll liveness until the recorder is gone or `limit` elapses.
    /// Returns whether it exited.
    async fn wait_for_exit(
        &self,
        recorder: RecorderKind,
        limit: Duration,
    ) -> Result<bool, RecordError> {
        let mut waited = Duration::ZERO;
        while self.deps.runtime.is_running(recorder).await? {
            if waited >= limit {
                return Ok(false);
            }
            sleep(STOP_POLL_INTERVAL).await;
            waited += STOP_POLL_INTERVAL;
        }
        Ok(true)
    }
}

/// Move a file, falling back to copy + remove across filesystems.
async fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to).await?;
            fs::remove_file(from).await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::application::ports::{
        AudioSource, EarlyExit, Monitor, NotificationId, ProbeError, SourceState,
    };

    use super::*;

    struct FakeProbe;

    #[async_trait]
    impl SystemProbe for FakeProbe {
        async fn pci_devices(&self) -> Result<String, ProbeError> {
            Ok("00:02.0 VGA compatible controller: Intel Corporation".to_string())
        }

        fn binary_installed(&self, name: &str) -> bool {
            name == "wl-screenrec"
        }
    }

    struct FakeCompositor {
        monitors: Vec<Monitor>,
    }

    #[async_trait]
    impl Compositor for FakeCompositor {
        async fn monitors(&self) -> Result<Vec<Monitor>, CompositorError> {
            Ok(self.monitors.clone())
        }
    }

    struct FakePicker;

    #[async_trait]
    impl RegionPicker for FakePicker {
        async fn pick(&self) -> Result<String, RegionPickError> {
            Ok("10,10 640x480\n".to_string())
        }
    }

    struct FakeAudio {
        sources: Vec<AudioSource>,
    }

    #[async_trait]
    impl AudioSources for FakeAudio {
        async fn list(&self) -> Result<Vec<AudioSource>, AudioError> {
            Ok(self.sources.clone())
        }
    }

    /// Clonable fakes with shared interior state, so the test harness keeps a
    /// handle to what the use case consumed.
    #[derive(Clone, Default)]
    struct FakeNotifier {
        sent: Arc<Mutex<Vec<String>>>,
        closed: Arc<Mutex<Vec<String>>>,
        action: Arc<Mutex<Option<String>>>,
        next_id: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Notifier for FakeNotifier {
        async fn notify(
            &self,
            summary: &str,
            _body: &str,
            _persistent: bool,
        ) -> Result<NotificationId, NotifyError> {
            self.sent.lock().unwrap().push(summary.to_string());
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            Ok(id.to_string())
        }

        async fn request_action(
            &self,
            summary: &str,
            _body: &str,
            _actions: &[NotificationAction],
            _timeout: Duration,
        ) -> Result<Option<String>, NotifyError> {
            self.sent.lock().unwrap().push(summary.to_string());
            Ok(self.action.lock().unwrap().clone())
        }

        async fn close(&self, id: &str) {
            self.closed.lock().unwrap().push(id.to_string());
        }
    }

    /// Scripted recorder runtime working against a real temp directory: spawn
    /// writes the in-progress file the way a recorder would.
    #[derive(Clone, Default)]
    struct FakeRuntime {
        running: Arc<AtomicBool>,
        spawned: Arc<AtomicUsize>,
        early_exit: Arc<Mutex<Option<EarlyExit>>>,
        spawned_args: Arc<Mutex<Vec<String>>>,
    }

    impl FakeRuntime {
        fn with_early_exit(exit: EarlyExit) -> Self {
            let runtime = Self::default();
            *runtime.early_exit.lock().unwrap() = Some(exit);
            runtime
        }
    }

    #[async_trait]
    impl RecorderRuntime for FakeRuntime {
        async fn spawn(&self, invocation: &RecorderInvocation) -> Result<u32, RuntimeError> {
            std::fs::write(&invocation.output, b"video").map_err(|e| {
                RuntimeError::SpawnFailed {
                    recorder: invocation.recorder.binary(),
                    message: e.to_string(),
                }
            })?;
            *self.spawned_args.lock().unwrap() = invocation.args.clone();
            self.spawned.fetch_add(1, Ordering::SeqCst);
            self.running.store(true, Ordering::SeqCst);
            Ok(1234)
        }

        async fn watch_early_exit(&self, _checks: u32, _interval: Duration) -> Option<EarlyExit> {
            let exit = self.early_exit.lock().unwrap().clone();
            if exit.is_some() {
                self.running.store(false, Ordering::SeqCst);
            }
            exit
        }

        async fn terminate_by_name(&self, _recorder: RecorderKind) {
            self.running.store(false, Ordering::SeqCst);
        }

        async fn force_kill(&self, _recorder: RecorderKind) {
            self.running.store(false, Ordering::SeqCst);
        }

        async fn is_running(&self, _recorder: RecorderKind) -> Result<bool, RuntimeError> {
            Ok(self.running.load(Ordering::SeqCst))
        }

        fn pid_alive(&self, _pid: u32) -> bool {
            self.running.load(Ordering::SeqCst)
        }
    }

    #[derive(Clone, Default)]
    struct FakeLauncher {
        opened: Arc<Mutex<Vec<PathBuf>>>,
    }

    #[async_trait]
    impl Launcher for FakeLauncher {
        async fn open_detached(&self, path: &Path) -> Result<(), LaunchError> {
            self.opened.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FakeFileManager {
        fail: bool,
        revealed: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl FileManager for FakeFileManager {
        async fn reveal(&self, path: &Path) -> Result<(), crate::application::ports::RevealError> {
            self.revealed.lock().unwrap().push(path.to_path_buf());
            if self.fail {
                Err(crate::application::ports::RevealError::RevealFailed(
                    "exit status 1".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn load(&self) -> Result<Option<SessionDescriptor>, StateError> {
            Err(StateError::ReadFailed("permission denied".to_string()))
        }

        async fn save(&self, _descriptor: &SessionDescriptor) -> Result<(), StateError> {
            Ok(())
        }

        async fn clear(&self) -> Result<(), StateError> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStore {
        descriptor: Arc<Mutex<Option<SessionDescriptor>>>,
    }

    #[async_trait]
    impl SessionStore for MemoryStore {
        async fn load(&self) -> Result<Option<SessionDescriptor>, StateError> {
            Ok(self.descriptor.lock().unwrap().clone())
        }

        async fn save(&self, descriptor: &SessionDescriptor) -> Result<(), StateError> {
            *self.descriptor.lock().unwrap() = Some(descriptor.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StateError> {
            *self.descriptor.lock().unwrap() = None;
            Ok(())
        }
    }

    struct Harness {
        _dir: TempDir,
        settings: RecordSettings,
        notifier: FakeNotifier,
        runtime: FakeRuntime,
        launcher: FakeLauncher,
        store: MemoryStore,
    }

    fn use_case(
        harness: &Harness,
        audio: Vec<AudioSource>,
        reveal_fails: bool,
    ) -> RecordSessionUseCase {
        RecordSessionUseCase::new(
            RecordDeps {
                probe: Box::new(FakeProbe),
                compositor: Box::new(FakeCompositor {
                    monitors: vec![
                        Monitor {
                            name: "DP-2".to_string(),
                            focused: false,
                        },
                        Monitor {
                            name: "DP-1".to_string(),
                            focused: true,
                        },
                    ],
                }),
                picker: Box::new(FakePicker),
                audio: Box::new(FakeAudio { sources: audio }),
                notifier: Box::new(harness.notifier.clone()),
                runtime: Box::new(harness.runtime.clone()),
                launcher: Box::new(harness.launcher.clone()),
                file_manager: Box::new(FakeFileManager {
                    fail: reveal_fails,
                    revealed: Mutex::new(Vec::new()),
                }),
                store: Box::new(harness.store.clone()),
            },
            harness.settings.clone(),
        )
    }

    fn harness() -> Harness {
        let dir = TempDir::new().unwrap();
        let settings = RecordSettings {
            recording_path: dir.path().join("state/record/recording.mp4"),
            recordings_dir: dir.path().join("videos/Recordings"),
            recorder_override: None,
            stop_timeout: Duration::from_secs(5),
            action_timeout: Duration::from_secs(1),
        };
        Harness {
            _dir: dir,
            settings,
            notifier: FakeNotifier::default(),
            runtime: FakeRuntime::default(),
            launcher: FakeLauncher::default(),
            store: MemoryStore::default(),
        }
    }

    fn timestamped_name(name: &str) -> bool {
        // recording_YYYYMMDD_HH-MM-SS.mp4
        let Some(rest) = name.strip_prefix("recording_") else {
            return false;
        };
        let Some(stamp) = rest.strip_suffix(".mp4") else {
            return false;
        };
        let bytes = stamp.as_bytes();
        bytes.len() == 17
            && bytes[..8].iter().all(u8::is_ascii_digit)
            && bytes[8] == b'_'
            && stamp[9..].split('-').count() == 3
            && stamp[9..]
                .split('-')
                .all(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()))
    }

    #[tokio::test]
    async fn start_then_stop_relocates_exactly_one_file() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        let started = use_case.toggle(RecordInput::default()).await.unwrap();
        assert!(matches!(
            started,
            RecordOutcome::Started {
                recorder: RecorderKind::WlScreenrec
            }
        ));
        assert!(harness.settings.recording_path.exists());

        let stopped = use_case.toggle(RecordInput::default()).await.unwrap();
        let RecordOutcome::Stopped { path, action } = stopped else {
            panic!("expected Stopped");
        };
        assert!(action.is_none());
        assert!(path.exists());
        assert!(!harness.settings.recording_path.exists());

        let entries: Vec<_> = std::fs::read_dir(&harness.settings.recordings_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(timestamped_name(&entries[0]), "bad name: {}", entries[0]);
    }

    #[tokio::test]
    async fn start_uses_focused_monitor_when_no_region_given() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case.toggle(RecordInput::default()).await.unwrap();
        assert_eq!(
            *harness.runtime.spawned_args.lock().unwrap(),
            vec!["-o", "DP-1"]
        );
    }

    #[tokio::test]
    async fn interactive_region_is_trimmed() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case
            .toggle(RecordInput {
                region: Some(REGION_PICKER_SENTINEL.to_string()),
                sound: false,
            })
            .await
            .unwrap();
        assert_eq!(
            *harness.runtime.spawned_args.lock().unwrap(),
            vec!["-g", "10,10 640x480"]
        );
    }

    #[tokio::test]
    async fn no_focused_monitor_fails_before_spawn() {
        let harness = harness();
        let mut use_case = use_case(&harness, vec![], false);
        use_case.deps.compositor = Box::new(FakeCompositor {
            monitors: vec![Monitor {
                name: "DP-1".to_string(),
                focused: false,
            }],
        });

        let result = use_case.toggle(RecordInput::default()).await;
        assert!(matches!(result, Err(RecordError::NoFocusedMonitor)));
        assert_eq!(harness.runtime.spawned.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sound_picks_running_source() {
        let harness = harness();
        let use_case = use_case(
            &harness,
            vec![
                AudioSource {
                    name: "src1".to_string(),
                    state: SourceState::Idle,
                },
                AudioSource {
                    name: "src2".to_string(),
                    state: SourceState::Running,
                },
            ],
            false,
        );

        use_case
            .toggle(RecordInput {
                region: Some("0,0 100x100".to_string()),
                sound: true,
            })
            .await
            .unwrap();

        let args = harness.runtime.spawned_args.lock().unwrap();
        assert!(args.contains(&"src2".to_string()));
    }

    #[tokio::test]
    async fn no_audio_source_aborts_without_spawn() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        let result = use_case
            .toggle(RecordInput {
                region: Some("0,0 100x100".to_string()),
                sound: true,
            })
            .await;

        assert!(matches!(result, Err(RecordError::NoAudioSource)));
        assert_eq!(harness.runtime.spawned.load(Ordering::SeqCst), 0);
        assert!(harness.notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn early_exit_reports_failure_and_rolls_back() {
        let harness = harness();
        let mut use_case = use_case(&harness, vec![], false);
        use_case.deps.runtime = Box::new(FakeRuntime::with_early_exit(EarlyExit {
            code: Some(1),
            stderr: "compositor rejected the capture".to_string(),
        }));

        let outcome = use_case.toggle(RecordInput::default()).await.unwrap();
        assert!(matches!(outcome, RecordOutcome::StartFailed { .. }));

        let sent = harness.notifier.sent.lock().unwrap();
        assert_eq!(*sent, vec!["Recording started", "Recording failed"]);
        drop(sent);

        // start notification closed, in-progress file and descriptor gone
        assert_eq!(harness.notifier.closed.lock().unwrap().len(), 1);
        assert!(!harness.settings.recording_path.exists());
        assert!(harness.store.descriptor.lock().unwrap().is_none());
        assert!(!harness.settings.recordings_dir.exists());
    }

    #[tokio::test]
    async fn clean_early_exit_is_not_a_failure() {
        let harness = harness();
        let mut use_case = use_case(&harness, vec![], false);
        use_case.deps.runtime = Box::new(FakeRuntime::with_early_exit(EarlyExit {
            code: Some(0),
            stderr: String::new(),
        }));

        let outcome = use_case.toggle(RecordInput::default()).await.unwrap();
        assert!(matches!(outcome, RecordOutcome::Started { .. }));
        assert_eq!(
            *harness.notifier.sent.lock().unwrap(),
            vec!["Recording started"]
        );
    }

    #[tokio::test]
    async fn delete_action_removes_final_file() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case.toggle(RecordInput::default()).await.unwrap();
        *harness.notifier.action.lock().unwrap() = Some("delete".to_string());

        let RecordOutcome::Stopped { path, .. } =
            use_case.toggle(RecordInput::default()).await.unwrap()
        else {
            panic!("expected Stopped");
        };

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn watch_action_opens_final_file() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case.toggle(RecordInput::default()).await.unwrap();
        *harness.notifier.action.lock().unwrap() = Some("watch".to_string());

        let RecordOutcome::Stopped { path, .. } =
            use_case.toggle(RecordInput::default()).await.unwrap()
        else {
            panic!("expected Stopped");
        };

        assert_eq!(*harness.launcher.opened.lock().unwrap(), vec![path]);
    }

    #[tokio::test]
    async fn open_falls_back_to_parent_when_reveal_fails() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], true);

        use_case.toggle(RecordInput::default()).await.unwrap();
        *harness.notifier.action.lock().unwrap() = Some("open".to_string());

        use_case.toggle(RecordInput::default()).await.unwrap();

        let opened = harness.launcher.opened.lock().unwrap();
        assert_eq!(*opened, vec![harness.settings.recordings_dir.clone()]);
    }

    #[tokio::test]
    async fn stop_closes_start_notification_from_descriptor() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case.toggle(RecordInput::default()).await.unwrap();
        use_case.toggle(RecordInput::default()).await.unwrap();

        assert_eq!(harness.notifier.closed.lock().unwrap().len(), 1);
        assert!(harness.store.descriptor.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn stop_tolerates_missing_descriptor() {
        let harness = harness();
        let use_case = use_case(&harness, vec![], false);

        use_case.toggle(RecordInput::default()).await.unwrap();
        harness.store.clear().await.unwrap();

        // still running by name, so the toggle stops it
        let outcome = use_case.toggle(RecordInput::default()).await.unwrap();
        assert!(matches!(outcome, RecordOutcome::Stopped { .. }));
        assert!(harness.notifier.closed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn session_detection_tolerates_unreadable_descriptor() {
        let harness = harness();
        let mut use_case = use_case(&harness, vec![], false);
        use_case.deps.store = Box::new(FailingStore);

        // detection falls through to the process table and start proceeds
        let outcome = use_case.toggle(RecordInput::default()).await.unwrap();
        assert!(matches!(outcome, RecordOutcome::Started { .. }));
    }

    #[test]
    fn timestamp_pattern_check() {
        assert!(timestamped_name("recording_20260831_14-02-59.mp4"));
        assert!(!timestamped_name("recording_2026_14-02-59.mp4"));
        assert!(!timestamped_name("video_20260831_14-02-59.mp4"));
        assert!(!timestamped_name("recording_20260831_14:02:59.mp4"));
    }
}
