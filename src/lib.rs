//! autocomment - annotate source code through a commenting service
//!
//! Library backing the `autocomment` binary. The submission workflow is
//! front-end agnostic: editors, progress reporting, clipboards and the
//! remote service are all reached through traits.

pub mod config;
pub mod editor;
pub mod error;
pub mod fence;
pub mod ingest;
pub mod output;
pub mod service;
pub mod theme;
pub mod types;
pub mod workflow;
