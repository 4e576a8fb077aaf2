//! Route guards shared by user and admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install a guard that redirects to the role's login route
//! once stored sessions are loaded and no session with an id is present.
//! Login pages install the inverse redirect for already signed-in visitors.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use gateway::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where a protected page for `role` must send the visitor, if anywhere.
pub fn protected_redirect(role: Role, state: &SessionState) -> Option<&'static str> {
    if !state.loaded || state.is_signed_in(role) || state.signed_out == Some(role) {
        return None;
    }
    Some(role.login_route())
}

/// Where a login page for `role` sends an already signed-in visitor.
pub fn signed_in_redirect(role: Role, state: &SessionState) -> Option<&'static str> {
    if !state.loaded || !state.is_signed_in(role) {
        return None;
    }
    Some(match role {
        Role::User => "/dashboard",
        Role::Admin => "/admin/dashboard",
    })
}

/// Redirect to the login route whenever the session for `role` disappears.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = protected_redirect(role, &session.get()) {
            navigate(route, NavigateOptions::default());
        }
    });
}

/// Move a signed-in visitor off the login page for `role`.
pub fn install_signed_in_redirect<F>(session: RwSignal<SessionState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = signed_in_redirect(role, &session.get()) {
            navigate(route, NavigateOptions::default());
        }
    });
}
