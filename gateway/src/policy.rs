//! Response classification and the single-shot retry rule.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::time::Duration;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::request::RequestDescriptor;

/// Statuses that are never worth a second attempt.
pub const NO_RETRY_STATUSES: [u16; 5] = [400, 401, 403, 404, 422];

pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Hand the response to the caller.
    Deliver,
    /// Clear the role's session and redirect.
    Unauthorized,
    /// Raise a server error.
    ServerError,
}

#[must_use]
pub fn classify(config: &GatewayConfig, status: u16) -> Disposition {
    if status == UNAUTHORIZED {
        Disposition::Unauthorized
    } else if config.accepts(status) {
        Disposition::Deliver
    } else {
        Disposition::ServerError
    }
}

/// Whether `error` on `request` may be retried.
///
/// Requires a received response with a retriable status, a descriptor that
/// has not been retried, and budget left.
#[must_use]
pub fn retry_eligible(request: &RequestDescriptor, error: &GatewayError) -> bool {
    let Some(status) = error.status() else {
        return false;
    };
    !NO_RETRY_STATUSES.contains(&status) && !request.retried && request.remaining_retries > 0
}

/// Consume the retry on `request` and return the wait before resubmitting.
///
/// The delay is computed from the budget after the decrement.
pub fn plan_retry(config: &GatewayConfig, request: &mut RequestDescriptor, error: &GatewayError) -> Option<Duration> {
    if !retry_eligible(request, error) {
        return None;
    }
    request.retried = true;
    request.remaining_retries -= 1;
    Some(config.retry_delay(request.remaining_retries))
}
