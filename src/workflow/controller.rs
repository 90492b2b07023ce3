//! Submission workflow controller

use crate::config::ServiceConfig;
use crate::editor::{DropZone, EditorSurface};
use crate::error::{Error, Result};
use crate::ingest::{IngestOutcome, ingest_file};
use crate::output::{ClipboardSink, OutputSurface, write_download};
use crate::service::CommentService;
use crate::types::{CommentStyle, Language, SubmissionRequest, SubmissionResult};
use crate::workflow::state::{GENERATING_LABEL, ProgressState, UiState};
use crate::workflow::{Phase, ProgressCallback};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Language value the detection endpoint returns when it gives up
const UNKNOWN_LANGUAGE: &str = "unknown";

/// Shown when submit is pressed without code or language
pub const VALIDATION_MESSAGE: &str = "Please enter code and select a language.";

/// Which optional fields a submission request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestShape {
    /// Send `language`
    pub language: bool,
    /// Send `comment_style`
    pub comment_style: bool,
}

impl From<&ServiceConfig> for RequestShape {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            language: config.send_language,
            comment_style: config.send_comment_style,
        }
    }
}

impl Default for RequestShape {
    fn default() -> Self {
        Self::from(&ServiceConfig::default())
    }
}

/// Result of a call to [`Workflow::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing happened
    Ignored,
    /// Input failed validation; no request was made
    Rejected(String),
    /// A request was made and its result is displayed
    Completed(SubmissionResult),
}

/// User-facing text for a failed submission
pub fn failure_message(err: &Error) -> String {
    match err {
        Error::Server { status, .. } => {
            format!("Failed to fetch response (HTTP {status}). Please try again.")
        }
        Error::Validation(msg) => msg.clone(),
        Error::Timeout(secs) => {
            format!("Failed to fetch response: no answer within {secs}s. Please try again.")
        }
        _ => "Failed to fetch response. Please try again.".to_string(),
    }
}

/// Submission workflow controller
///
/// Owns the UI state and the current selections. All methods take `&self`;
/// overlapping calls to [`Workflow::submit`] are dropped, not queued.
pub struct Workflow {
    editor: Arc<dyn EditorSurface>,
    service: Arc<dyn CommentService>,
    progress: Arc<dyn ProgressCallback>,
    shape: RequestShape,
    state: UiState,
    output: OutputSurface,
    language: Mutex<Option<Language>>,
    comment_style: Mutex<CommentStyle>,
}

impl Workflow {
    /// Create a workflow over the given collaborators
    pub fn new(
        editor: Arc<dyn EditorSurface>,
        service: Arc<dyn CommentService>,
        progress: Arc<dyn ProgressCallback>,
        shape: RequestShape,
    ) -> Self {
        Self {
            editor,
            service,
            progress,
            shape,
            state: UiState::new(),
            output: OutputSurface::new(),
            language: Mutex::new(None),
            comment_style: Mutex::new(CommentStyle::default()),
        }
    }

    /// Output surface showing the latest result
    pub const fn output(&self) -> &OutputSurface {
        &self.output
    }

    /// Whether a submission is running
    pub fn is_submitting(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Current progress indicator
    pub fn progress_state(&self) -> ProgressState {
        self.state.progress()
    }

    /// Change the language selection
    pub fn select_language(&self, language: Option<Language>) {
        *self
            .language
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = language;
    }

    /// Current language selection
    pub fn language(&self) -> Option<Language> {
        self.language
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Change the comment style
    pub fn set_comment_style(&self, style: CommentStyle) {
        *self
            .comment_style
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = style;
    }

    fn comment_style(&self) -> CommentStyle {
        *self
            .comment_style
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Load a picked file into the editor
    pub async fn ingest_file(&self, path: &Path) -> IngestOutcome {
        ingest_file(self.editor.as_ref(), path).await
    }

    /// Load the first of a set of dropped files into the editor
    pub async fn ingest_dropped(&self, zone: &mut DropZone, files: Vec<PathBuf>) -> IngestOutcome {
        match zone.drop(files) {
            Some(path) => self.ingest_file(&path).await,
            None => IngestOutcome::Unchanged,
        }
    }

    /// Send the editor text to the commenting service
    ///
    /// Every failure ends up as text on the output surface; this never
    /// returns an error.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.state.try_begin() else {
            debug!("submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        };

        let code = self.editor.value();
        let (false, Some(language)) = (code.trim().is_empty(), self.language()) else {
            return SubmitOutcome::Rejected(VALIDATION_MESSAGE.to_string());
        };

        self.state
            .set_progress(ProgressState::Indeterminate(GENERATING_LABEL.to_string()));
        self.output.show_message(GENERATING_LABEL);

        let result = match self.run_submission(code, language).await {
            Ok(commented) => SubmissionResult::Commented(commented),
            Err(e) => {
                debug!(error = %e, "submission failed");
                self.progress.on_error(&e).await;
                SubmissionResult::Failed(failure_message(&e))
            }
        };

        self.output.show_result(result.clone());
        self.progress.on_phase(Phase::Complete).await;

        SubmitOutcome::Completed(result)
    }

    async fn run_submission(&self, code: String, language: Language) -> Result<String> {
        let language = if language.is_auto() {
            self.detect(&code).await?
        } else {
            language
        };

        let request = SubmissionRequest {
            code,
            language: self.shape.language.then(|| language.as_str().to_string()),
            comment_style: self.shape.comment_style.then(|| self.comment_style()),
        };

        self.progress.on_phase(Phase::Submitting).await;
        debug!(language = %language, bytes = request.code.len(), "submitting code");

        self.service.comment(&request).await
    }

    /// Resolve `auto` through the service and adopt the answer as selection
    async fn detect(&self, code: &str) -> Result<Language> {
        self.progress.on_phase(Phase::Detecting).await;

        let detected = self.service.detect_language(code).await?;
        let language = Language::new(&detected)
            .filter(|l| l.as_str() != UNKNOWN_LANGUAGE)
            .ok_or_else(|| {
                Error::Validation("Could not detect the language. Select one and try again.".to_string())
            })?;

        self.progress
            .on_message(&format!("Detected language: {language}"))
            .await;
        self.select_language(Some(language.clone()));

        Ok(language)
    }

    /// Copy the displayed output to a clipboard
    pub fn copy_to_clipboard(&self, sink: &dyn ClipboardSink) -> Result<()> {
        let text = self.output.text();
        if text.is_empty() {
            return Err(Error::Validation("nothing to copy".to_string()));
        }
        sink.set_text(&text)
    }

    /// Save the displayed output as `commented_code.<ext>` in `dir`
    ///
    /// The extension follows the language selected at call time.
    pub fn download_as_file(&self, dir: &Path) -> Result<PathBuf> {
        let language = self.language();
        write_download(dir, language.as_ref(), &self.output.text())
    }
}
