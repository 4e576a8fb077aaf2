//! Gateway configuration resolved once at process start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::ops::Range;
use std::time::Duration;

pub const BASE_URL_ENV: &str = "PLAGIGUARD_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const RETRY_DELAY_STEP_MS: u64 = 1_000;

/// Statuses below 500 are handed back to the caller instead of raised.
pub const ACCEPTED_STATUS: Range<u16> = 200..500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub accepted_status: Range<u16>,
    pub max_retries: u32,
    pub retry_delay_step: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            accepted_status: ACCEPTED_STATUS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_step: Duration::from_millis(RETRY_DELAY_STEP_MS),
        }
    }

    /// Build config from `PLAGIGUARD_API_BASE_URL` at run time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Build config from `PLAGIGUARD_API_BASE_URL` captured at compile time.
    ///
    /// The WASM bundle has no process environment, so the value is baked in
    /// when the client crate is built.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("PLAGIGUARD_API_BASE_URL"))
    }

    #[must_use]
    pub fn from_base_url(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Linear backoff: `remaining * step`.
    #[must_use]
    pub fn retry_delay(&self, remaining: u32) -> Duration {
        self.retry_delay_step.saturating_mul(remaining)
    }

    #[must_use]
    pub fn accepts(&self, status: u16) -> bool {
        self.accepted_status.contains(&status)
    }

    /// Join the base URL with a path-and-query that starts with `/`.
    #[must_use]
    pub fn url(&self, path_and_query: &str) -> String {
        if path_and_query.starts_with('/') {
            format!("{}{path_and_query}", self.base_url)
        } else {
            format!("{}/{path_and_query}", self.base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
