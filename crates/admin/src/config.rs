//! Admin client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RENTAL_API_BASE_URL` - Base URL of the rental backend (e.g. `http://localhost:8080/api`)
//!
//! ## Optional
//! - `RENTAL_API_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `RENTAL_API_TOKEN` - Bearer token sent with every request
//! - `RENTAL_NOTICE_TTL_SECS` - Lifetime of success/error notices (default: 3)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NOTICE_TTL_SECS: u64 = 3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &["your-", "changeme", "replace", "placeholder", "xxx"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin client configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Backend connection settings
    pub backend: BackendConfig,
    /// How long success and error notices stay visible
    pub notice_ttl: Duration,
}

/// Rental backend connection settings.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Optional bearer token
    pub api_token: Option<SecretString>,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BackendConfig {
    /// Settings for a base URL with default timeout and no token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse or is
    /// not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("RENTAL_API_BASE_URL", base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_token: None,
        })
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("RENTAL_API_BASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("RENTAL_API_BASE_URL".to_string()))?;
        let base_url = parse_base_url("RENTAL_API_BASE_URL", &base_url)?;

        let timeout = parse_secs(&lookup, "RENTAL_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let notice_ttl = parse_secs(&lookup, "RENTAL_NOTICE_TTL_SECS", DEFAULT_NOTICE_TTL_SECS)?;

        let api_token = lookup("RENTAL_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .map(|token| {
                if looks_like_placeholder(&token) {
                    tracing::warn!("RENTAL_API_TOKEN appears to be a placeholder value");
                }
                SecretString::from(token)
            });

        Ok(Self {
            backend: BackendConfig {
                base_url,
                timeout,
                api_token,
            },
            notice_ttl,
        })
    }

    /// Replace the backend base URL (e.g. from a `--base-url` flag).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.backend.base_url = parse_base_url("--base-url", base_url)?;
        Ok(self)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(Duration::from_secs(default)), |raw| {
        raw.trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

fn looks_like_placeholder(secret: &str) -> bool {
    let lower = secret.to_lowercase();
    PLACEHOLDER_PATTERNS.iter().any(|p| lower.contains(p))
}
