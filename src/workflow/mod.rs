//! Submission workflow
//!
//! Wires an editor surface, the commenting service and an output surface
//! together:
//! 1. Ingestion - a picked or dropped file replaces the editor text
//! 2. Submission - code and language go to the service, one request at a time
//! 3. Output - the result is displayed, copied or saved to disk

mod controller;
mod progress;
mod state;

pub use controller::{RequestShape, SubmitOutcome, VALIDATION_MESSAGE, Workflow, failure_message};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use state::{GENERATING_LABEL, ProgressState, UiState};
