//! CLI commands
//!
//! Command implementations for the `autocomment` binary.

mod comment;
mod detect;
mod progress;
mod style;
mod theme;

pub use comment::{CommentArgs, run_comment};
pub use detect::run_detect;
pub use theme::{ThemeAction, run_theme};
