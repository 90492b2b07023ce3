//! Remote commenting service
//!
//! The workflow talks to the backend only through [`CommentService`], so
//! tests and alternative transports can stand in for the HTTP client.

mod http;

pub use http::HttpCommentService;

use crate::error::Result;
use crate::types::SubmissionRequest;
use async_trait::async_trait;

/// Commenting service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Submit code and return the commented version, fences stripped
    async fn comment(&self, request: &SubmissionRequest) -> Result<String>;

    /// Ask the service which language `code` is written in
    ///
    /// Returns `"unknown"` when the service can't tell.
    async fn detect_language(&self, code: &str) -> Result<String>;
}
