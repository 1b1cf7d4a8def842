//! Configuration management for the Spotify Artist Report tool.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Client credentials are required; endpoint URLs and
//! the market used for top tracks fall back to Spotify's public defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{Error, Res, types::Credentials};

/// Base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Token endpoint used for the client-credentials exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Market used when requesting an artist's top tracks.
pub const DEFAULT_MARKET: &str = "US";

/// Upper bound for every single HTTP exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Number of search results requested per artist lookup.
pub const SEARCH_LIMIT: u32 = 5;

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `sportcli/.env` first and in the working directory second. Variables that are
/// already set in the process environment are never overridden. Missing files
/// are silently skipped, so a fully exported environment needs no file at all.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sportcli/.env`
/// - macOS: `~/Library/Application Support/sportcli/.env`
/// - Windows: `%LOCALAPPDATA%/sportcli/.env`
pub fn load_env() {
    let path = env_file_path();
    if path.is_file() {
        if let Err(e) = dotenv::from_path(&path) {
            tracing::warn!(path = %path.display(), error = %e, "cannot parse env file");
        }
    }

    if let Err(e) = dotenv::dotenv() {
        tracing::debug!(error = %e, "no .env in working directory");
    }
}

/// Location of the user's `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sportcli/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// # Errors
///
/// Returns [`Error::Config`] if `SPOTIFY_CLIENT_ID` is unset or empty.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// The secret should be kept confidential and is never written to logs.
///
/// # Errors
///
/// Returns [`Error::Config`] if `SPOTIFY_CLIENT_SECRET` is unset or empty.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the token exchange URL, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the market (ISO 3166-1 alpha-2) used for top tracks.
pub fn spotify_market() -> String {
    optional("SPOTIFY_MARKET", DEFAULT_MARKET)
}

fn required(key: &str) -> Res<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::Config(format!("{key} must be set"))),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Runtime settings injected into the API client.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub market: String,
    pub timeout: Duration,
}

impl Settings {
    /// Settings pointing at Spotify's public endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            market: DEFAULT_MARKET.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Config`] when either credential is missing.
    pub fn from_env() -> Res<Self> {
        let credentials = Credentials::new(spotify_client_id()?, spotify_client_secret()?);
        Ok(Self {
            credentials,
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            market: spotify_market(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }
}
