//! Main app runner for the record toggle

use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::ConfigStore;
use crate::application::{
    RecordDeps, RecordInput, RecordOutcome, RecordSessionUseCase, RecordSettings,
};
use crate::domain::config::RecordConfig;
use crate::domain::recorder::RecorderKind;
use crate::infrastructure::{
    App2unitLauncher, DbusFileManager, HyprctlCompositor, JsonSessionStore, LspciProbe,
    NotifySendNotifier, PactlAudioSources, Paths, ShellRecorderRuntime, SlurpRegionPicker,
    XdgConfigStore,
};

use super::args::RecordArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the record toggle
pub async fn run_record(args: RecordArgs) -> ExitCode {
    let presenter = Presenter::new();
    let paths = Paths::from_env();
    let config = load_merged_config(&paths, &args).await;

    // Reject a bad recorder name before touching the system
    let recorder_override = match config.recorder.as_deref() {
        Some(name) => match name.parse::<RecorderKind>() {
            Ok(recorder) => Some(recorder),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => None,
    };

    let recordings_dir = config
        .recordings_dir
        .clone()
        .unwrap_or_else(|| paths.recordings_dir.clone());

    let settings = RecordSettings {
        recording_path: paths.recording_path(),
        recordings_dir,
        recorder_override,
        stop_timeout: Duration::from_secs(config.stop_timeout_or_default()),
        action_timeout: Duration::from_secs(config.action_timeout_or_default()),
    };

    let deps = RecordDeps {
        probe: Box::new(LspciProbe::new()),
        compositor: Box::new(HyprctlCompositor::new()),
        picker: Box::new(SlurpRegionPicker::new()),
        audio: Box::new(PactlAudioSources::new()),
        notifier: Box::new(NotifySendNotifier::new()),
        runtime: Box::new(ShellRecorderRuntime::new()),
        launcher: Box::new(App2unitLauncher::new()),
        file_manager: Box::new(DbusFileManager::new()),
        store: Box::new(JsonSessionStore::new(paths.session_path())),
    };

    let use_case = RecordSessionUseCase::new(deps, settings);
    let input = RecordInput {
        region: args.region.clone(),
        sound: config.sound_or_default(),
    };

    match use_case.toggle(input).await {
        Ok(outcome) => ExitCode::from(report_outcome(&presenter, &outcome)),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Present a toggle outcome and map it to an exit code.
///
/// A recorder that died during the launch window was already reported
/// through a notification, so the command itself still exits 0.
fn report_outcome(presenter: &Presenter, outcome: &RecordOutcome) -> u8 {
    match outcome {
        RecordOutcome::Started { recorder } => {
            presenter.success(&format!("Recording started ({})", recorder));
            EXIT_SUCCESS
        }
        RecordOutcome::StartFailed { stderr } => {
            presenter.warn("Recorder exited during startup");
            if !stderr.is_empty() {
                presenter.output(stderr);
            }
            EXIT_SUCCESS
        }
        RecordOutcome::Stopped { path, action } => {
            if action.as_deref() == Some("delete") {
                presenter.success("Recording deleted");
            } else {
                presenter.success(&format!("Recording saved to {}", path.display()));
            }
            EXIT_SUCCESS
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(paths: &Paths, args: &RecordArgs) -> RecordConfig {
    let store = XdgConfigStore::new(paths);
    let file_config = store
        .load()
        .await
        .unwrap_or_else(|_| RecordConfig::empty());

    let cli_config = RecordConfig {
        recorder: args.recorder.clone(),
        sound: args.sound.then_some(true),
        ..Default::default()
    };

    // Merge: defaults < file < cli
    RecordConfig::defaults().merge(file_config).merge(cli_config)
}
