// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the pet-rescue API when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Where the host application shows its login page.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the `/api` prefix (no trailing slash)
    pub api_base_url: String,
    /// JSON file backing the persisted keys; `None` keeps them in memory
    pub store_path: Option<PathBuf>,
    /// Navigation target after a 401
    pub login_path: String,
    /// Keep remembered accounts when logging out
    pub keep_accounts_on_logout: bool,
    /// Optional per-request timeout (none by default)
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            store_path: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            keep_accounts_on_logout: false,
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("PET_RESCUE_API_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        validate_base_url(&api_base_url)?;

        let keep_accounts_on_logout = match env::var("PET_RESCUE_KEEP_ACCOUNTS_ON_LOGOUT") {
            Ok(v) => parse_bool(&v)
                .ok_or(ConfigError::Invalid("PET_RESCUE_KEEP_ACCOUNTS_ON_LOGOUT", v))?,
            Err(_) => false,
        };

        let request_timeout = match env::var("PET_RESCUE_TIMEOUT_SECS") {
            Ok(v) => Some(Duration::from_secs(
                v.trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PET_RESCUE_TIMEOUT_SECS", v.clone()))?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            store_path: env::var("PET_RESCUE_STORE_PATH").ok().map(PathBuf::from),
            login_path: env::var("PET_RESCUE_LOGIN_PATH")
                .unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string()),
            keep_accounts_on_logout,
            request_timeout,
        })
    }

    /// Config pointing at a test backend, everything else default.
    pub fn test_default(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Invalid("PET_RESCUE_API_URL", url.to_string()));
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
