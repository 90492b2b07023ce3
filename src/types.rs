//! Core types for autocomment

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language value that asks the service to detect the language
pub const AUTO_LANGUAGE: &str = "auto";

/// Language name → download file extension
const EXTENSIONS: &[(&str, &str)] = &[
    ("python", "py"),
    ("javascript", "js"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
];

/// Other spellings of the table's languages (detector lexer names, aliases)
const ALIASES: &[(&str, &str)] = &[
    ("c++", "cpp"),
    ("cxx", "cpp"),
    ("python 2.x", "python"),
    ("python 3", "python"),
    ("python3", "python"),
    ("python2", "python"),
    ("py", "python"),
    ("js", "javascript"),
    ("node", "javascript"),
    ("ecmascript", "javascript"),
];

/// Extension used for languages missing from the lookup table
pub const DEFAULT_EXTENSION: &str = "txt";

/// Selected source language (lowercase name, e.g. "python")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language from a user-supplied or detected name
    ///
    /// Known aliases map onto the canonical name (`C++` → cpp). Returns
    /// `None` for blank names.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map_or(name, |(_, canonical)| (*canonical).to_string());
        Some(Self(canonical))
    }

    /// The `auto` selection
    pub fn auto() -> Self {
        Self(AUTO_LANGUAGE.to_string())
    }

    /// Language name as sent to the service
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this selection asks for service-side detection
    pub fn is_auto(&self) -> bool {
        self.0 == AUTO_LANGUAGE
    }

    /// Guess a language from a file extension (`py` → python)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        EXTENSIONS
            .iter()
            .find(|(_, e)| *e == ext)
            .map(|(name, _)| Self((*name).to_string()))
    }

    /// File extension for downloads, `txt` when unknown
    pub fn extension(&self) -> &'static str {
        EXTENSIONS
            .iter()
            .find(|(name, _)| *name == self.0)
            .map_or(DEFAULT_EXTENSION, |(_, ext)| ext)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| "language must not be empty".to_string())
    }
}

/// Comment verbosity accepted by `/upload` deployments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Short comments
    #[default]
    Brief,
    /// Thorough comments
    Detailed,
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brief => write!(f, "brief"),
            Self::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for CommentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "detailed" => Ok(Self::Detailed),
            other => Err(format!("invalid comment style '{other}', use 'brief' or 'detailed'")),
        }
    }
}

/// JSON body sent to the commenting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    /// Source code to annotate
    pub code: String,
    /// Source language, omitted by deployments that don't take it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comment verbosity, omitted by deployments that don't take it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_style: Option<CommentStyle>,
}

/// What the output surface shows after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Commented code, fences already stripped
    Commented(String),
    /// User-facing failure message
    Failed(String),
}

impl SubmissionResult {
    /// Text displayed for this result
    pub fn text(&self) -> &str {
        match self {
            Self::Commented(code) | Self::Failed(code) => code,
        }
    }

    /// Whether the submission produced commented code
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Commented(_))
    }
}

/// UI colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}
