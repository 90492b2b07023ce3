//! Drop target state

use std::path::PathBuf;

/// Region accepting dropped files
///
/// Highlighted while a drag hovers over it. Dropping or leaving always clears
/// the highlight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropZone {
    highlighted: bool,
}

impl DropZone {
    /// Create an idle drop zone
    pub const fn new() -> Self {
        Self { highlighted: false }
    }

    /// Whether a drag is hovering
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// A drag entered or moved over the zone
    pub const fn drag_enter(&mut self) {
        self.highlighted = true;
    }

    /// The drag left without dropping
    pub const fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Files were dropped; returns the one to ingest
    ///
    /// Only the first file is used, the rest are ignored.
    pub fn drop(&mut self, files: Vec<PathBuf>) -> Option<PathBuf> {
        self.highlighted = false;
        files.into_iter().next()
    }
}
