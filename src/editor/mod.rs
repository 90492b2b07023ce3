//! Editor surface abstraction
//!
//! The workflow only needs to read and replace the whole text, and to ask the
//! widget to reflow after a replacement. Front-ends implement
//! [`EditorSurface`] for their widget; [`TextBuffer`] is the in-memory one.

mod buffer;
mod drop_zone;

pub use buffer::TextBuffer;
pub use drop_zone::DropZone;

/// Editor surface trait
///
/// Methods take `&self`; implementations provide their own interior
/// mutability so one editor can be shared between the workflow and the
/// front-end.
pub trait EditorSurface: Send + Sync {
    /// Current source text
    fn value(&self) -> String;

    /// Replace the whole source text
    fn set_value(&self, text: &str);

    /// Recompute layout after a content replacement
    fn refresh(&self);
}
