//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` mirrors the two stored sessions for guards and navbars; `upload`
//! tracks the dashboard's selection and progress; `result` carries the
//! analysis shown on `/result` between routes.

pub mod result;
pub mod session;
pub mod upload;
