// DietView - app/export.rs
//
// Export lifecycle management. Orchestrates PDF generation on a background
// thread, sending the outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `ExportManager` lives on the UI thread; `run_export` runs on a
//     background thread.
//   - The view snapshot is captured before any mutation and restored when
//     the terminal message arrives, on success and on failure alike.
//   - A second export request while one is in flight is rejected rather
//     than racing the first export's state mutation.

use crate::core::model::{DietPlan, ExportProgress};
use crate::core::pdf::{self, ExportOptions};
use crate::core::view::{ViewSnapshot, ViewState};
use crate::util::error::ExportError;
use std::path::PathBuf;
use std::sync::mpsc;

/// Manages a single best-effort export operation on a background thread.
pub struct ExportManager {
    /// Channel receiver for the UI to poll the outcome.
    progress_rx: Option<mpsc::Receiver<ExportProgress>>,

    /// View snapshot held for the duration of the export. Present exactly
    /// while an export is in flight.
    snapshot: Option<ViewSnapshot>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            snapshot: None,
        }
    }

    /// Whether an export is currently running.
    pub fn in_flight(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Start exporting `plan` to `dest`.
    ///
    /// Snapshots `view`, then mutates it for the export: floating controls
    /// hidden, light theme forced, every panel active. Returns false (and
    /// leaves the view untouched) if an export is already in flight.
    pub fn start(
        &mut self,
        plan: &DietPlan,
        view: &mut ViewState,
        dest: PathBuf,
        opts: ExportOptions,
    ) -> bool {
        if self.in_flight() {
            tracing::warn!("Export request rejected: one is already in flight");
            return false;
        }

        self.snapshot = Some(view.snapshot());
        view.begin_export(plan);

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let plan = plan.clone();
        let render_view = view.clone();
        std::thread::spawn(move || {
            run_export(plan, render_view, dest, opts, tx);
        });

        tracing::info!("Export started");
        true
    }

    /// Poll for the outcome without blocking.
    ///
    /// On the terminal message (success or failure) the captured snapshot
    /// is restored into `view` — exactly the previously active panel ids,
    /// the prior theme, and the floating controls' visibility — before the
    /// message is returned to the caller.
    ///
    /// A disconnected channel means the worker died without reporting (a
    /// panic inside the PDF pipeline). That counts as a failure: the view
    /// is restored the same way and a synthesized failure is returned, so
    /// the manager never stays in flight forever.
    pub fn poll(&mut self, view: &mut ViewState) -> Option<ExportProgress> {
        let msg = match self.progress_rx.as_ref()?.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => ExportProgress::Failed {
                error: "export worker terminated unexpectedly".to_string(),
            },
        };

        if let Some(snapshot) = self.snapshot.take() {
            view.restore(snapshot);
        }
        self.progress_rx = None;

        match &msg {
            ExportProgress::Completed { path, bytes } => {
                tracing::info!(path = %path.display(), bytes, "Export complete");
            }
            ExportProgress::Failed { error } => {
                tracing::error!(error = %error, "Export failed");
            }
        }
        Some(msg)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background export pipeline: render → write → report.
///
/// Runs on a background thread. Sends exactly one terminal message; a send
/// error means the receiver was dropped (UI closed) and is ignored.
fn run_export(
    plan: DietPlan,
    view: ViewState,
    dest: PathBuf,
    opts: ExportOptions,
    tx: mpsc::Sender<ExportProgress>,
) {
    let result = pdf::render_plan(&plan, &view, &opts).and_then(|bytes| {
        std::fs::write(&dest, &bytes)
            .map_err(|e| ExportError::Io {
                path: dest.clone(),
                source: e,
            })
            .map(|()| bytes.len())
    });

    let msg = match result {
        Ok(bytes) => ExportProgress::Completed {
            path: dest,
            bytes,
        },
        Err(e) => ExportProgress::Failed {
            error: e.to_string(),
        },
    };
    let _ = tx.send(msg);
}
