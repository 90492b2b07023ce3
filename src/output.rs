//! Output surface and its actions

use crate::error::{Error, Result};
use crate::types::{DEFAULT_EXTENSION, Language, SubmissionResult};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Base name of downloaded files
pub const DOWNLOAD_BASE_NAME: &str = "commented_code";

/// Where copied text goes
pub trait ClipboardSink: Send + Sync {
    /// Put `text` on the clipboard
    fn set_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Shows the latest submission result
#[derive(Debug, Default)]
pub struct OutputSurface {
    text: Mutex<String>,
    result: Mutex<Option<SubmissionResult>>,
}

impl OutputSurface {
    /// Create an empty output surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact text currently displayed
    pub fn text(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Latest result, if a submission finished
    pub fn result(&self) -> Option<SubmissionResult> {
        self.result
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Show a transient message (e.g. while a request runs)
    pub fn show_message(&self, message: &str) {
        message.clone_into(&mut self.text.lock().unwrap_or_else(std::sync::PoisonError::into_inner));
    }

    /// Show a finished result, replacing the previous one
    pub fn show_result(&self, result: SubmissionResult) {
        self.show_message(result.text());
        *self.result.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(result);
    }

    /// Clear text and result
    pub fn clear(&self) {
        self.show_message("");
        *self.result.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}

/// Download file name for a language selection
pub fn download_file_name(language: Option<&Language>) -> String {
    let ext = language.map_or(DEFAULT_EXTENSION, Language::extension);
    format!("{DOWNLOAD_BASE_NAME}.{ext}")
}

/// Write `text` into `dir` under the download file name
pub fn write_download(dir: &Path, language: Option<&Language>, text: &str) -> Result<PathBuf> {
    let path = dir.join(download_file_name(language));
    std::fs::write(&path, text)?;
    debug!(path = %path.display(), "saved output");
    Ok(path)
}
