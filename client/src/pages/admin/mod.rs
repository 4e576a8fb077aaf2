//! Admin console screens. Every page except login and signup requires an
//! admin session and renders inside the admin layout.

pub mod analytics;
pub mod dashboard;
pub mod documents;
pub mod login;
pub mod settings;
pub mod signup;
pub mod users;

use gateway::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::state::session::SessionState;
use crate::util::guard::install_session_guard;

/// Guarded admin shell: sidebar plus page body.
#[component]
pub fn AdminLayout(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_guard(session, Role::Admin, use_navigate());

    view! {
        <div class="admin">
            <AdminNavbar/>
            <main class="admin__main">
                <h1>{title}</h1>
                {children()}
            </main>
        </div>
    }
}
