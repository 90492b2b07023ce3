//! Mock commenting service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use autocomment::error::{Error, Result};
use autocomment::service::CommentService;
use autocomment::types::SubmissionRequest;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::Notify;

/// Simple mock commenting service
///
/// Features:
/// - Call tracking for verification
/// - Configurable response text
/// - Error injection for failure path testing
/// - Optional gate that holds `comment` until released
pub struct MockCommentService {
    response: Mutex<String>,
    detected_language: Mutex<String>,
    comment_calls: Mutex<Vec<SubmissionRequest>>,
    detect_calls: Mutex<Vec<String>>,
    error_on_comment: Mutex<Option<fn() -> Error>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockCommentService {
    /// Mock answering every request with `response`
    pub fn answering(response: &str) -> Self {
        Self {
            response: Mutex::new(response.to_string()),
            detected_language: Mutex::new("python".to_string()),
            comment_calls: Mutex::new(Vec::new()),
            detect_calls: Mutex::new(Vec::new()),
            error_on_comment: Mutex::new(None),
            gate: Mutex::new(None),
        }
    }

    // === Configuration ===

    /// Make `comment` fail with the error built by `make`
    pub fn fail_comment(&self, make: fn() -> Error) {
        *self.error_on_comment.lock().unwrap() = Some(make);
    }

    /// Set what `detect_language` answers
    pub fn set_detected_language(&self, language: &str) {
        *self.detected_language.lock().unwrap() = language.to_string();
    }

    /// Hold every `comment` call until the returned handle is notified
    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    // === Call verification ===

    /// All requests passed to `comment`
    pub fn comment_calls(&self) -> Vec<SubmissionRequest> {
        self.comment_calls.lock().unwrap().clone()
    }

    /// All code passed to `detect_language`
    pub fn detect_calls(&self) -> Vec<String> {
        self.detect_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentService for MockCommentService {
    async fn comment(&self, request: &SubmissionRequest) -> Result<String> {
        self.comment_calls.lock().unwrap().push(request.clone());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(make) = *self.error_on_comment.lock().unwrap() {
            return Err(make());
        }

        Ok(self.response.lock().unwrap().clone())
    }

    async fn detect_language(&self, code: &str) -> Result<String> {
        self.detect_calls.lock().unwrap().push(code.to_string());
        Ok(self.detected_language.lock().unwrap().clone())
    }
}
