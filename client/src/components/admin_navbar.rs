//! Sidebar navigation for the admin console.

use gateway::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::sign_out;
use crate::state::session::SessionState;

const LINKS: [(&str, &str); 5] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/users", "Users"),
    ("/admin/documents", "Documents"),
    ("/admin/analytics", "Analytics"),
    ("/admin/settings", "Settings"),
];

#[component]
pub fn AdminNavbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        sign_out(session, Role::Admin);
        navigate(Role::Admin.login_route(), NavigateOptions::default());
    };

    view! {
        <aside class="admin-nav">
            <div class="admin-nav__brand">"PlagiGuard Admin"</div>
            <span class="admin-nav__name">{move || session.with(|s| s.display_name(Role::Admin))}</span>
            <nav class="admin-nav__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
            <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
        </aside>
    }
}
