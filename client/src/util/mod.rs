//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is pure presentation logic (filters, chart geometry,
//! highlighting, form checks) or thin browser glue, kept out of page
//! components so it can be unit tested without a DOM.

pub mod admin_filter;
pub mod chart;
pub mod forms;
pub mod guard;
pub mod highlight;
pub mod history;
pub mod report;
pub mod score;
