//! The request gateway: credential routing, response validation, retry and
//! session expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen and the CLI talk to the backend through one [`Gateway`].
//! Endpoints in `api` build [`RequestDescriptor`]s; this module resolves the
//! credential, submits through the [`Transport`], and applies the policy in
//! `policy` to the result.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::policy::{self, Disposition};
use crate::request::RequestDescriptor;
use crate::session::SessionStore;
use crate::transport::{Navigator, OutboundRequest, Progress, RawResponse, Timer, Transport, backend_message};

/// A response in the accepted range, handed back to the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Backend-provided message: `error` first, then `message`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        backend_message(&self.body)
    }

    /// Decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidResponse`] when the body does not match.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_value(self.body.clone()).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    /// Fail with [`GatewayError::Rejected`] unless the status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns the backend message, or `fallback` when there is none.
    pub fn ok_or_rejected(self, fallback: &str) -> Result<Self, GatewayError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.message().unwrap_or_else(|| fallback.to_owned());
        Err(GatewayError::Rejected { status: self.status, message })
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        let body = raw.value();
        Self { status: raw.status, body }
    }
}

pub struct Gateway<T, S, N, C> {
    config: GatewayConfig,
    transport: T,
    store: S,
    navigator: N,
    timer: C,
}

impl<T, S, N, C> Gateway<T, S, N, C>
where
    T: Transport,
    S: SessionStore,
    N: Navigator,
    C: Timer,
{
    pub fn new(config: GatewayConfig, transport: T, store: S, navigator: N, timer: C) -> Self {
        Self { config, transport, store, navigator, timer }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn timer(&self) -> &C {
        &self.timer
    }

    /// Submit `request`, retrying at most once on a retriable failure.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]; accepted statuses other than 401 are returned as
    /// `Ok` and left to the caller.
    pub async fn send(&self, request: RequestDescriptor) -> Result<Response, GatewayError> {
        self.send_with_progress(request, None).await
    }

    /// [`Gateway::send`] with an upload progress callback.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::send`].
    pub async fn send_with_progress(
        &self,
        mut request: RequestDescriptor,
        progress: Option<Progress<'_>>,
    ) -> Result<Response, GatewayError> {
        request.remaining_retries = request.remaining_retries.min(self.config.max_retries);
        loop {
            let error = match self.submit(&request, progress).await {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };
            let Some(delay) = policy::plan_retry(&self.config, &mut request, &error) else {
                log::warn!("gateway: {} {} failed: {error}", request.method, request.path);
                return Err(error);
            };
            log::warn!(
                "gateway: {} {} failed ({error}); retrying in {}ms ({} left)",
                request.method,
                request.path,
                delay.as_millis(),
                request.remaining_retries
            );
            self.timer.sleep(delay).await;
        }
    }

    async fn submit(&self, request: &RequestDescriptor, progress: Option<Progress<'_>>) -> Result<Response, GatewayError> {
        let role = request.role();
        // Re-read on every submission so a retry sees the current session.
        let token = self.store.token(role);
        let outbound = OutboundRequest {
            method: request.method,
            url: self.config.url(&request.path_and_query()),
            headers: request.outbound_headers(token.as_deref()),
            body: &request.body,
            timeout: self.config.timeout,
        };
        log::debug!(
            "gateway: {} {} headers={:?} body={}",
            outbound.method,
            outbound.url,
            outbound.redacted_headers(),
            request.body.summary()
        );

        let raw = self.transport.send(&outbound, progress).await?;
        log::debug!("gateway: {} {} -> {}", outbound.method, outbound.url, raw.status);

        match policy::classify(&self.config, raw.status) {
            Disposition::Deliver => Ok(Response::from(raw)),
            Disposition::Unauthorized => {
                log::info!("gateway: {:?} credential rejected; clearing session", role);
                self.store.clear(role);
                self.navigator.navigate(role.login_route());
                Err(GatewayError::Unauthorized { role, message: raw.error_message() })
            }
            Disposition::ServerError => {
                let message = raw.error_message().unwrap_or_else(|| format!("HTTP {}", raw.status));
                Err(GatewayError::Server { status: raw.status, message })
            }
        }
    }
}
