//! Gateway error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant renders a message that screens can show verbatim. Only
//! [`GatewayError::Server`] is ever retried, and only by the gateway itself.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::session::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("Network error - Unable to reach the server")]
    Network(String),

    /// The request exceeded the configured overall timeout.
    #[error("Request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// The backend answered with a status outside the accepted range.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend rejected the credential for `role`; its session was cleared.
    #[error("{}", .message.as_deref().unwrap_or("Session expired. Please log in again."))]
    Unauthorized { role: Role, message: Option<String> },

    /// A non-success response inside the accepted range.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The backend answered 2xx but the payload is unusable.
    #[error("{0}")]
    InvalidResponse(String),

    /// Local validation failed before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Session persistence failed.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl GatewayError {
    /// HTTP status attached to the error, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message to render in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
