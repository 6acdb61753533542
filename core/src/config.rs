//! Suite configuration.
//!
//! # Design
//! One explicit struct, constructed once at startup and passed by
//! reference to whatever builds clients. No module-level globals: a test
//! binary that never touches the live service never reads the
//! environment at all.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the {0} environment variable must be set")]
    MissingVar(&'static str),

    #[error("HELPREQ_API_TIMEOUT_MS is not a valid number: {0}")]
    BadTimeout(String),
}

/// Settings for running the suite against the live service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the service under test, no trailing slash.
    pub base_url: String,
    /// Per-request timeout for the live transport. No retries.
    pub timeout: Duration,
    /// Credentials of the seeded test account.
    pub test_login: String,
    pub test_password: String,
    /// A password guaranteed to be wrong, for negative login tests.
    pub invalid_password: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `HELPREQ_API_BASE_URL` defaults to the local dev server and
    /// `HELPREQ_API_TIMEOUT_MS` to 10 seconds; the test credentials are
    /// required because every authenticated live test needs them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("HELPREQ_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let timeout_ms = match std::env::var("HELPREQ_API_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::BadTimeout(raw))?,
            Err(_) => 10_000,
        };

        let test_login = std::env::var("HELPREQ_TEST_USER_LOGIN")
            .map_err(|_| ConfigError::MissingVar("HELPREQ_TEST_USER_LOGIN"))?;
        let test_password = std::env::var("HELPREQ_TEST_USER_PASSWORD")
            .map_err(|_| ConfigError::MissingVar("HELPREQ_TEST_USER_PASSWORD"))?;
        let invalid_password = std::env::var("HELPREQ_INVALID_USER_PASSWORD")
            .unwrap_or_else(|_| "invalidPass123".to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
            test_login,
            test_password,
            invalid_password,
        })
    }

    /// Configuration pointed at an in-process server, for integration
    /// tests that spin up the mock service on a random port.
    pub fn for_local(base_url: &str, login: &str, password: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(5),
            test_login: login.to_string(),
            test_password: password.to_string(),
            invalid_password: "invalidPass123".to_string(),
        }
    }
}
