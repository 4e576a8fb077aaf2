//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navbars, alerts) and result visuals
//! (charts, score bars, upload progress) while reading shared state from
//! Leptos context providers.

pub mod admin_navbar;
pub mod alert;
pub mod charts;
pub mod navbar;
pub mod progress_bar;
pub mod score_bar;
