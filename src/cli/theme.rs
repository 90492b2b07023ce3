//! Theme command - show or toggle the persisted colour theme

use crate::cli::style::Stylize;
use anstream::println;
use autocomment::error::Result;
use autocomment::theme::ThemeStore;
use clap::Subcommand;

/// Theme actions
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

/// Run the theme command
pub fn run_theme(store: &ThemeStore, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Show => {
            println!("{}", store.load().to_string().emphasis());
        }
        ThemeAction::Toggle => {
            let theme = store.toggle()?;
            println!("{}", theme.to_string().emphasis());
        }
    }
    Ok(())
}
