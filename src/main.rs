//! autocomment - get source code commented by a remote service
//!
//! CLI binary: reads a file, submits it, prints the commented code.

use anyhow::Result;
use autocomment::config::{ServiceConfig, Variant};
use autocomment::theme::ThemeStore;
use autocomment::types::{CommentStyle, Language};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "autocomment")]
#[command(about = "Send source code to a commenting service and get it back annotated")]
#[command(version)]
struct Cli {
    /// Service base URL (default: $AUTOCOMMENT_URL or http://127.0.0.1:5000)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Backend flavour: "comment" (/comment, sends language) or "upload"
    /// (/upload, sends comment style)
    #[arg(long, global = true, default_value = "comment")]
    variant: Variant,

    /// Endpoint path, overriding the variant's
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Response field holding the commented code, overriding the variant's
    #[arg(long, global = true)]
    response_key: Option<String>,

    /// Request timeout in seconds (default: $AUTOCOMMENT_TIMEOUT_SECS or 30)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Comment a source file and print the result
    Comment {
        /// File to comment (`-` for stdin); extra files are ignored
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Source language (default: from the file extension, else auto-detect)
        #[arg(short, long)]
        language: Option<Language>,

        /// Comment style: brief or detailed
        #[arg(short, long)]
        style: Option<CommentStyle>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the result as commented_code.<ext> in this directory
        #[arg(long, value_name = "DIR")]
        download: Option<PathBuf>,
    },

    /// Ask the service which language a file is written in
    Detect {
        /// File to inspect
        file: PathBuf,
    },

    /// Show or toggle the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<cli::ThemeAction>,
    },
}

impl Cli {
    /// Variant defaults, then environment, then flags
    fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::from_env(self.variant)?;
        if let Some(url) = &self.url {
            config = config.with_base_url(url)?;
        }
        if let Some(path) = &self.endpoint {
            config = config.with_path(path);
        }
        if let Some(key) = &self.response_key {
            config = config.with_response_key(key);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs)?;
        }
        Ok(config)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("AUTOCOMMENT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Comment {
            ref files,
            ref language,
            style,
            copy,
            ref download,
        } => {
            let args = cli::CommentArgs {
                files: files.clone(),
                language: language.clone(),
                style,
                copy,
                download: download.clone(),
            };
            cli::run_comment(cli.service_config()?, args).await?;
        }
        Commands::Detect { ref file } => {
            cli::run_detect(cli.service_config()?, file).await?;
        }
        Commands::Theme { action } => {
            let store = ThemeStore::open_default()?;
            cli::run_theme(&store, action.unwrap_or(cli::ThemeAction::Show))?;
        }
    }

    Ok(())
}
