//! Browser side of the gateway seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` implements the gateway's transport, session store, navigator,
//! and timer on top of `fetch`, `localStorage`, and `window.location`. It
//! only exists in the hydrated bundle; SSR renders pages without touching
//! the backend.

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(feature = "hydrate")]
pub use browser::{BrowserGateway, gateway, read_document};
