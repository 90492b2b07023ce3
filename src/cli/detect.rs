//! Detect command - ask the service which language a file is in

use anstream::println;
use autocomment::config::ServiceConfig;
use autocomment::error::{Error, Result};
use autocomment::ingest::read_source;
use autocomment::service::{CommentService, HttpCommentService};
use std::path::Path;

/// Run the detect command
pub async fn run_detect(config: ServiceConfig, path: &Path) -> Result<()> {
    let code = read_source(path).await?;
    if code.trim().is_empty() {
        return Err(Error::Validation(format!("{} is empty", path.display())));
    }

    let service = HttpCommentService::new(config)?;
    let language = service.detect_language(&code).await?;
    println!("{language}");
    Ok(())
}
