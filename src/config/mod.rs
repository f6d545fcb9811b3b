//! Reader configuration.
//!
//! The reader needs very little: the origin of the remote content API, the
//! translation resource to request alongside verses, and a request timeout.

use thiserror::Error;

/// Origin the original application fetches from.
pub const DEFAULT_API_ORIGIN: &str = "https://api.quran.com/api/v4";

/// Default translation resource id requested with verses.
pub const DEFAULT_TRANSLATION_ID: u32 = 33;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors produced while validating a [`ReaderConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_origin must not be empty")]
    EmptyOrigin,

    #[error("api_origin must be an http(s) URL, got {0:?}")]
    InvalidOrigin(String),

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Configuration for the content client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Base origin of the content API, without a trailing slash.
    pub api_origin: String,
    /// Translation resource id requested with each verse list.
    pub translation_id: u32,
    /// Timeout applied to every request.
    pub request_timeout_secs: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            translation_id: DEFAULT_TRANSLATION_ID,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration pointing at a custom API origin, keeping the
    /// remaining defaults.
    pub fn with_origin(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration before a client is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.api_origin.trim();
        if origin.is_empty() {
            return Err(ConfigError::EmptyOrigin);
        }
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(ConfigError::InvalidOrigin(self.api_origin.clone()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
