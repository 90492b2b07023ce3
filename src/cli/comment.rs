//! Comment command - send a file to the service and print the result

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check, cross, hyperlink_path};
use anstream::{eprintln, println};
use anyhow::{Context, Result, bail};
use autocomment::config::ServiceConfig;
use autocomment::editor::{EditorSurface, TextBuffer};
use autocomment::ingest::{IngestOutcome, first_file};
use autocomment::output::SystemClipboard;
use autocomment::service::HttpCommentService;
use autocomment::types::{CommentStyle, Language, SubmissionResult};
use autocomment::workflow::{RequestShape, SubmitOutcome, Workflow};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Options for the comment command
#[derive(Debug)]
pub struct CommentArgs {
    /// Selected files; only the first is used, `-` reads stdin
    pub files: Vec<PathBuf>,
    /// Explicit language
    pub language: Option<Language>,
    /// Comment style for deployments that take one
    pub style: Option<CommentStyle>,
    /// Copy the result to the clipboard
    pub copy: bool,
    /// Save the result into this directory
    pub download: Option<PathBuf>,
}

/// Language to select: explicit, else from the file extension, else `auto`
fn resolve_language(explicit: Option<Language>, path: &Path) -> Language {
    explicit
        .or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(Language::from_extension)
        })
        .unwrap_or_else(Language::auto)
}

/// Run the comment command
pub async fn run_comment(config: ServiceConfig, args: CommentArgs) -> Result<()> {
    let Some(path) = first_file(&args.files).map(Path::to_path_buf) else {
        bail!("no input file given");
    };

    let editor = Arc::new(TextBuffer::new());
    let shape = RequestShape::from(&config);
    let service = HttpCommentService::new(config)?;
    let workflow = Workflow::new(
        editor.clone(),
        Arc::new(service),
        Arc::new(CliProgress::new()),
        shape,
    );

    if path.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("failed to read stdin")?;
        editor.set_value(&text);
    } else if workflow.ingest_file(&path).await == IngestOutcome::Unchanged {
        bail!("could not read {} as text", path.display());
    }

    let language = resolve_language(args.language, &path);
    eprintln!(
        "Commenting {} ({} lines, {})",
        path.display().to_string().accent(),
        editor.line_count(),
        language.to_string().accent()
    );
    workflow.select_language(Some(language));
    if let Some(style) = args.style {
        workflow.set_comment_style(style);
    }

    match workflow.submit().await {
        SubmitOutcome::Completed(SubmissionResult::Commented(code)) => {
            println!("{code}");
        }
        SubmitOutcome::Completed(SubmissionResult::Failed(message))
        | SubmitOutcome::Rejected(message) => {
            bail!(message);
        }
        SubmitOutcome::Ignored => bail!("a submission is already running"),
    }

    if args.copy {
        match workflow.copy_to_clipboard(&SystemClipboard) {
            Ok(()) => eprintln!("{} {}", check(), "Copied to clipboard".success()),
            Err(e) => eprintln!("{} Copy failed: {}", cross(), e.to_string().error()),
        }
    }

    if let Some(dir) = args.download {
        let saved = workflow.download_as_file(&dir)?;
        eprintln!("{} {} {}", check(), "Saved".success(), hyperlink_path(&saved));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_language_wins() {
        let lang = resolve_language(Language::new("java"), Path::new("main.py"));
        assert_eq!(lang.as_str(), "java");
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(resolve_language(None, Path::new("x.js")).as_str(), "javascript");
    }

    #[test]
    fn test_unknown_extension_is_auto() {
        assert!(resolve_language(None, Path::new("x.rb")).is_auto());
        assert!(resolve_language(None, Path::new("-")).is_auto());
    }
}
