//! Top navigation for signed-in users.

use gateway::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Clear the stored session for `role` and forget it locally.
pub fn sign_out(session: RwSignal<SessionState>, role: Role) {
    #[cfg(feature = "hydrate")]
    crate::net::gateway().logout(role);
    session.update(|s| s.sign_out(role));
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = move || session.with(|s| s.display_name(Role::User));
    let on_logout = move |_| {
        sign_out(session, Role::User);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/dashboard" attr:class="navbar__brand">"PlagiGuard"</A>
            <div class="navbar__links">
                <A href="/dashboard">"Upload"</A>
                <A href="/history">"History"</A>
                <A href="/profile">"Profile"</A>
            </div>
            <div class="navbar__user">
                <span class="navbar__name">{name}</span>
                <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
            </div>
        </nav>
    }
}
