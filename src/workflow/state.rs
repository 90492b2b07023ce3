//! UI state owned by the workflow

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Label shown while a submission is in flight
pub const GENERATING_LABEL: &str = "Generating comments...";

/// Progress indicator state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgressState {
    /// Indicator hidden
    #[default]
    Hidden,
    /// Indicator spinning with a label
    Indeterminate(String),
}

/// Mutable UI flags
///
/// `in_flight` is the only guard against overlapping submissions. It is only
/// ever released by dropping an [`InFlight`] guard.
#[derive(Debug, Default)]
pub struct UiState {
    in_flight: AtomicBool,
    progress: Mutex<ProgressState>,
}

impl UiState {
    /// Create idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is running (submit control disabled)
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Current progress indicator
    pub fn progress(&self) -> ProgressState {
        self.progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_progress(&self, progress: ProgressState) {
        *self
            .progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = progress;
    }

    /// Claim the in-flight flag, `None` if already claimed
    pub(crate) fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight { state: self })
    }
}

/// Held for the duration of one submission
///
/// Dropping it (on return, error or unwind) re-enables submission and hides
/// the progress indicator.
#[derive(Debug)]
pub(crate) struct InFlight<'a> {
    state: &'a UiState,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.set_progress(ProgressState::Hidden);
        self.state.in_flight.store(false, Ordering::SeqCst);
    }
}
