//! Service configuration
//!
//! Two backend deployments exist and disagree on the contract:
//! - `/comment` takes `{code, language}` and answers `{"commented code": ..}`
//! - `/upload` takes `{code, comment_style}` and answers `{"commented_code": ..}`
//!
//! [`Variant`] picks the defaults, every field can be overridden.

use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default service address (local development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default client-side request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response key used by `/comment` deployments
pub const COMMENT_RESPONSE_KEY: &str = "commented code";

/// Response key used by `/upload` deployments
pub const UPLOAD_RESPONSE_KEY: &str = "commented_code";

/// Language detection endpoint path
pub const DETECT_LANGUAGE_PATH: &str = "/detect_language";

/// Backend deployment flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// `POST /comment` with `language`
    #[default]
    Comment,
    /// `POST /upload` with `comment_style`
    Upload,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "comment" => Ok(Self::Comment),
            "upload" => Ok(Self::Upload),
            other => Err(format!("unknown variant '{other}', use 'comment' or 'upload'")),
        }
    }
}

/// Where and how to reach the commenting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service base URL
    pub base_url: Url,
    /// Commenting endpoint path
    pub path: String,
    /// Response field holding the commented code
    pub response_key: String,
    /// Whether the request carries `language`
    pub send_language: bool,
    /// Whether the request carries `comment_style`
    pub send_comment_style: bool,
    /// Client-side request timeout
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Defaults for a deployment variant
    pub fn for_variant(variant: Variant) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("hardcoded base URL is valid");
        match variant {
            Variant::Comment => Self {
                base_url,
                path: "/comment".to_string(),
                response_key: COMMENT_RESPONSE_KEY.to_string(),
                send_language: true,
                send_comment_style: false,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            Variant::Upload => Self {
                base_url,
                path: "/upload".to_string(),
                response_key: UPLOAD_RESPONSE_KEY.to_string(),
                send_language: false,
                send_comment_style: true,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Variant defaults overridden by environment variables
    ///
    /// - `AUTOCOMMENT_URL`: service base URL
    /// - `AUTOCOMMENT_TIMEOUT_SECS`: request timeout
    pub fn from_env(variant: Variant) -> Result<Self> {
        Self::from_lookup(variant, |key| env::var(key).ok())
    }

    /// Variant defaults overridden by values from `lookup`
    pub fn from_lookup(variant: Variant, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::for_variant(variant);

        if let Some(url) = lookup("AUTOCOMMENT_URL") {
            config = config.with_base_url(&url)?;
        }

        if let Some(secs) = lookup("AUTOCOMMENT_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|_| {
                Error::Config(format!("AUTOCOMMENT_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config = config.with_timeout_secs(secs)?;
        }

        Ok(config)
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| Error::Config(format!("invalid service URL '{url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "service URL must be http or https: {url}"
            )));
        }
        self.base_url = parsed;
        Ok(self)
    }

    /// Replace the endpoint path
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self
    }

    /// Replace the response field name
    #[must_use]
    pub fn with_response_key(mut self, key: &str) -> Self {
        self.response_key = key.to_string();
        self
    }

    /// Replace the timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }
        self.timeout_secs = secs;
        Ok(self)
    }

    /// Timeout as a [`Duration`]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Full URL of the commenting endpoint
    pub fn comment_url(&self) -> String {
        self.endpoint_url(&self.path)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}
