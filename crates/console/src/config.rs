//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LEDGERDESK_API_URL` - Base URL of the backend call endpoint
//!   (e.g., `http://172.30.1.22/api`)
//!
//! ## Optional
//! - `LEDGERDESK_SESSION_FILE` - Path of the persisted session file
//!   (default: `$HOME/.ledgerdesk/session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const ENV_API_URL: &str = "LEDGERDESK_API_URL";
const ENV_SESSION_FILE: &str = "LEDGERDESK_SESSION_FILE";
const DEFAULT_SESSION_FILE: &str = ".ledgerdesk/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console application configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend call endpoint; every request posts here.
    pub api_url: Url,
    /// Where the admin session is persisted across runs.
    pub session_path: PathBuf,
}

impl ConsoleConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LEDGERDESK_API_URL` is missing or not
    /// a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var(ENV_API_URL)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_API_URL.to_string()))?;
        let api_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar(ENV_API_URL.to_string(), e.to_string()))?;

        let session_path = std::env::var_os(ENV_SESSION_FILE).map_or_else(
            || {
                std::env::var_os("HOME").map_or_else(
                    || PathBuf::from(DEFAULT_SESSION_FILE),
                    |home| PathBuf::from(home).join(DEFAULT_SESSION_FILE),
                )
            },
            PathBuf::from,
        );

        Ok(Self {
            api_url,
            session_path,
        })
    }
}
