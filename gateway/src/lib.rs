//! Request gateway shared by the PlagiGuard browser client and CLI.
//!
//! This crate owns everything about talking to the PlagiGuard backend that is
//! independent of where the code runs: base-URL configuration, role-scoped
//! sessions, request descriptors, the retry / auth-expiry policy, typed
//! endpoints, and the wire DTOs. Browser and native callers plug in their own
//! transport, session storage, navigation, and timer through the traits in
//! [`transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` wires the gateway to `gloo-net`, `localStorage`, and
//! `window.location`; `cli` wires it to `reqwest`, session files, and tokio
//! timers. Tests drive it with in-memory fakes.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod policy;
pub mod request;
pub mod session;
pub mod transport;
pub mod types;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::{Gateway, Response};
pub use request::{Body, FormPart, Method, RequestDescriptor};
pub use session::{AdminSession, MemorySessionStore, Role, Session, SessionStore, UserSession};
pub use transport::{NoNavigation, Navigator, OutboundRequest, Progress, RawResponse, Timer, Transport};
