//! Application configuration loading from environment variables.
//!
//! Everything is read once at startup. A `.env` file, if present, is loaded by
//! `main` before this module runs.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,ai_service=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 8000)
//! - `MAX_BODY_BYTES`: Largest accepted request body (default: 20 MiB)
//! - `CORS_ALLOWED_ORIGINS`: Comma-separated origins; empty allows any origin
//! - `SHUTDOWN_GRACE_SECONDS`: Time allowed to drain connections on shutdown (default: 10)

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Request bodies larger than this are rejected with 413
    pub max_body_bytes: usize,

    /// Origins allowed by CORS; empty means any origin
    pub cors_allowed_origins: Vec<String>,

    /// Upper bound on graceful shutdown after a signal
    pub shutdown_grace_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_allowed_origins: Vec::new(),
            shutdown_grace_seconds: 10,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: env_or(&lookup, "HOST", defaults.host)?,
            port: env_or(&lookup, "PORT", defaults.port)?,
            max_body_bytes: env_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or(defaults.cors_allowed_origins),
            shutdown_grace_seconds: env_or(
                &lookup,
                "SHUTDOWN_GRACE_SECONDS",
                defaults.shutdown_grace_seconds,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
