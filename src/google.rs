//! Google API client configuration with sensible defaults.
//!
//! Both Speech API versions and the Translate TTS endpoint share one HTTP
//! client factory and one credential-resolution path.

use crate::error::{KvitreError, Result};
use std::time::Duration;

/// Default timeout for Google API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding an API key, sent as a `key` query parameter.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable holding an OAuth access token, sent as a bearer header.
pub const ACCESS_TOKEN_ENV: &str = "GCLOUD_ACCESS_TOKEN";

/// Environment variable selecting the primary (v2) recognizer resource.
pub const RECOGNIZER_ENV: &str = "GCP_RECOGNIZER";

/// Credentials for the Speech APIs.
#[derive(Debug, Clone)]
pub enum GoogleAuth {
    ApiKey(String),
    BearerToken(String),
}

impl GoogleAuth {
    /// Resolve credentials from the environment.
    ///
    /// Prefers `GOOGLE_API_KEY`, falls back to `GCLOUD_ACCESS_TOKEN` (the
    /// output of `gcloud auth print-access-token`).
    pub fn from_env() -> Result<Self> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(GoogleAuth::ApiKey(key.trim().to_string()));
            }
        }
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Ok(GoogleAuth::BearerToken(token.trim().to_string()));
            }
        }
        Err(KvitreError::Config(format!(
            "No Google credentials found. Set {} or {}.",
            API_KEY_ENV, ACCESS_TOKEN_ENV
        )))
    }

    /// Attach these credentials to a request.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            GoogleAuth::ApiKey(key) => request.query(&[("key", key.as_str())]),
            GoogleAuth::BearerToken(token) => request.bearer_auth(token),
        }
    }
}

/// Create an HTTP client with the default request timeout.
pub fn create_client() -> reqwest::Client {
    create_client_with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create an HTTP client with a custom request timeout.
///
/// The timeout is the only guard against a hung backend call, so every
/// adapter goes through this factory.
pub fn create_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Check whether either credential variable is set and non-empty.
pub fn is_auth_configured() -> bool {
    GoogleAuth::from_env().is_ok()
}

/// Read the primary recognizer resource name from the environment.
///
/// Returns `None` when the variable is unset or blank, which disables the
/// v2 path entirely.
pub fn recognizer_from_env() -> Option<String> {
    std::env::var(RECOGNIZER_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
