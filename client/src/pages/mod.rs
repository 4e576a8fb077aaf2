//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, gateway calls,
//! navigation) and delegates rendering details to `components`. Gateway
//! calls only run in the hydrated bundle.

pub mod admin;
pub mod dashboard;
pub mod forgot_password;
pub mod history;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod result;
