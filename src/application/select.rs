//! Recorder selection use case

use thiserror::Error;

use crate::domain::recorder::RecorderKind;

use super::ports::{ProbeError, SystemProbe};

/// Errors from recorder selection
#[derive(Debug, Clone, Error)]
pub enum SelectError {
    #[error("No compatible screen recorder found. Install wl-screenrec or wf-recorder")]
    NoRecorderFound,

    #[error(transparent)]
    Probe(ProbeError),
}

/// Pick which recorder binary to use based on the installed GPU.
///
/// NVIDIA GPUs get wf-recorder when it is installed, since wl-screenrec's
/// hardware encoding path does not work there. Otherwise wl-screenrec is
/// preferred, with wf-recorder as the fallback.
///
/// A PCI query that ran but exited non-zero silently falls back to whichever
/// recorder is around; a query that could not be executed at all propagates.
pub async fn select_recorder<P: SystemProbe + ?Sized>(
    probe: &P,
) -> Result<RecorderKind, SelectError> {
    match probe.pci_devices().await {
        Ok(pci) => {
            if pci.to_lowercase().contains("nvidia")
                && probe.binary_installed(RecorderKind::WfRecorder.binary())
            {
                return Ok(RecorderKind::WfRecorder);
            }

            if probe.binary_installed(RecorderKind::WlScreenrec.binary()) {
                return Ok(RecorderKind::WlScreenrec);
            }

            if probe.binary_installed(RecorderKind::WfRecorder.binary()) {
                return Ok(RecorderKind::WfRecorder);
            }

            Err(SelectError::NoRecorderFound)
        }
        Err(ProbeError::QueryFailed(_)) => {
            if probe.binary_installed(RecorderKind::WlScreenrec.binary()) {
                Ok(RecorderKind::WlScreenrec)
            } else {
                Ok(RecorderKind::WfRecorder)
            }
        }
        Err(error @ ProbeError::ExecFailed(_)) => Err(SelectError::Probe(error)),
    }
}
