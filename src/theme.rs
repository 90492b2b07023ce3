//! Persisted colour theme
//!
//! The only state that survives a restart. Stored as JSON in the user config
//! directory; a missing or unreadable file means the default theme.

use crate::error::{Error, Result};
use crate::types::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the config directory
pub const CONFIG_DIR_ENV: &str = "AUTOCOMMENT_CONFIG_DIR";

const APP_DIR: &str = "autocomment";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Reads and writes the persisted theme
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by a specific file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user config directory
    ///
    /// `AUTOCOMMENT_CONFIG_DIR` takes precedence over the platform default.
    pub fn open_default() -> Result<Self> {
        let dir = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("no config directory on this platform".to_string()))?
                .join(APP_DIR),
        };
        Ok(Self::at(dir.join(PREFERENCES_FILE)))
    }

    /// File holding the preference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted theme, `light` if none
    pub fn load(&self) -> Theme {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return Theme::default();
        };

        match serde_json::from_str::<Preferences>(&contents) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt preferences");
                Theme::default()
            }
        }
    }

    /// Persist `theme`
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&Preferences { theme })?;
        std::fs::write(&self.path, contents)?;
        debug!(%theme, "saved theme");
        Ok(())
    }

    /// Flip the theme and persist the new one
    pub fn toggle(&self) -> Result<Theme> {
        let theme = self.load().toggled();
        self.save(theme)?;
        Ok(theme)
    }
}
