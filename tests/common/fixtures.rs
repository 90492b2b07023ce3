//! Test data factories
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use crate::common::mock_service::MockCommentService;
use autocomment::editor::TextBuffer;
use autocomment::types::Language;
use autocomment::workflow::{NoopProgress, RequestShape, Workflow};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Workflow plus handles to its collaborators
pub struct Harness {
    pub workflow: Workflow,
    pub editor: Arc<TextBuffer>,
    pub service: Arc<MockCommentService>,
}

/// Workflow over a mock service with the `/comment` request shape
pub fn harness(service: MockCommentService) -> Harness {
    harness_with_shape(service, RequestShape::default())
}

/// Workflow over a mock service with a custom request shape
pub fn harness_with_shape(service: MockCommentService, shape: RequestShape) -> Harness {
    let editor = Arc::new(TextBuffer::new());
    let service = Arc::new(service);
    let workflow = Workflow::new(
        editor.clone(),
        service.clone(),
        Arc::new(NoopProgress),
        shape,
    );
    Harness {
        workflow,
        editor,
        service,
    }
}

/// Parse a language name
pub fn lang(name: &str) -> Language {
    Language::new(name).unwrap()
}

/// Temporary file holding `contents`
pub fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}
