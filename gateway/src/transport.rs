//! Runtime seams the gateway is generic over.
//!
//! The browser, the CLI, and the test suite each supply their own
//! implementations; the retry and auth policy never touches a concrete HTTP
//! stack.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use serde_json::Value;

use crate::error::GatewayError;
use crate::request::{AUTHORIZATION, Body, Method};

/// Upload progress callback, receiving a percentage in `0..=100`.
pub type Progress<'a> = &'a dyn Fn(u8);

/// One fully resolved submission handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct OutboundRequest<'a> {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: &'a Body,
    pub timeout: Duration,
}

impl OutboundRequest<'_> {
    /// Header list with the bearer credential masked.
    #[must_use]
    pub fn redacted_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case(AUTHORIZATION) {
                    (k.clone(), "[REDACTED]".to_owned())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect()
    }
}

/// Status and raw body of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Body parsed as JSON; empty or non-JSON bodies become `Null`.
    #[must_use]
    pub fn value(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    /// Backend-provided message, see [`backend_message`].
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        backend_message(&self.value())
    }
}

/// Non-blank `error` field of a response body, else its `message`.
#[must_use]
pub fn backend_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}

pub trait Transport {
    /// Submit one request and return whatever status the backend answered.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] when no response was received and
    /// [`GatewayError::Timeout`] when `request.timeout` elapsed first.
    async fn send(&self, request: &OutboundRequest<'_>, progress: Option<Progress<'_>>)
    -> Result<RawResponse, GatewayError>;
}

/// Moves the user to a login route after an authorization failure.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Suspends the calling flow without blocking other work.
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Navigator for contexts with nowhere to go (SSR, CLI).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&self, route: &str) {
        log::debug!("gateway: navigation to {route} skipped");
    }
}
