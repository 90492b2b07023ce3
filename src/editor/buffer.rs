//! In-memory editor surface

use crate::editor::EditorSurface;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Plain text buffer implementing [`EditorSurface`]
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: Mutex<String>,
    refreshes: AtomicU64,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`
    pub fn with_text(text: &str) -> Self {
        let buffer = Self::new();
        buffer.set_value(text);
        buffer
    }

    /// Number of times [`EditorSurface::refresh`] ran
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Number of lines, as a reflowing editor would lay them out
    pub fn line_count(&self) -> usize {
        let text = self.text.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        text.lines().count().max(1)
    }
}

impl EditorSurface for TextBuffer {
    fn value(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn set_value(&self, text: &str) {
        let mut current = self.text.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        text.clone_into(&mut current);
    }

    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}
