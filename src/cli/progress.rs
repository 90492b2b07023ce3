//! CLI progress callback with a spinner

use crate::cli::style::{Stylize, spinner_style};
use anstream::eprintln;
use async_trait::async_trait;
use autocomment::error::Error;
use autocomment::workflow::{Phase, ProgressCallback};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr while a submission runs
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create an idle progress reporter
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn with_spinner(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        let mut guard = self
            .spinner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *guard);
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        self.with_spinner(|spinner| match phase {
            Phase::Detecting | Phase::Submitting => {
                let bar = spinner.get_or_insert_with(|| {
                    let bar = ProgressBar::new_spinner();
                    bar.set_style(spinner_style());
                    bar.enable_steady_tick(Duration::from_millis(80));
                    bar
                });
                bar.set_message(format!("{phase}..."));
            }
            Phase::Complete => {
                if let Some(bar) = spinner.take() {
                    bar.finish_and_clear();
                }
            }
        });
    }

    async fn on_error(&self, _err: &Error) {
        // The command reports the failure text itself
        self.with_spinner(|spinner| {
            if let Some(bar) = spinner.take() {
                bar.finish_and_clear();
            }
        });
    }

    async fn on_message(&self, message: &str) {
        self.with_spinner(|spinner| match spinner {
            Some(bar) => bar.println(message.muted().to_string()),
            None => eprintln!("{}", message.muted()),
        });
    }
}
