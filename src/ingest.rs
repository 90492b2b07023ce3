//! File ingestion
//!
//! Loads a picked or dropped file into the editor surface. A file that can't
//! be read leaves the editor untouched; the failure is only logged.

use crate::editor::EditorSurface;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Delay before asking the editor to reflow after a replacement
pub const REFLOW_DELAY: Duration = Duration::from_millis(100);

/// What ingestion did to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Editor text replaced with the file contents
    Loaded {
        /// Bytes read
        bytes: usize,
    },
    /// File couldn't be read; editor unchanged
    Unchanged,
}

/// Pick the file to ingest from a multi-file selection
pub fn first_file(paths: &[PathBuf]) -> Option<&Path> {
    if paths.len() > 1 {
        debug!(ignored = paths.len() - 1, "using first file of selection");
    }
    paths.first().map(PathBuf::as_path)
}

/// Read a file as UTF-8 text
pub async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Replace the editor contents with a file's text
///
/// On success the editor is refreshed exactly once, after [`REFLOW_DELAY`].
pub async fn ingest_file(editor: &dyn EditorSurface, path: &Path) -> IngestOutcome {
    let text = match read_source(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable file");
            return IngestOutcome::Unchanged;
        }
    };

    editor.set_value(&text);
    debug!(path = %path.display(), bytes = text.len(), "loaded file into editor");

    tokio::time::sleep(REFLOW_DELAY).await;
    editor.refresh();

    IngestOutcome::Loaded { bytes: text.len() }
}
