//! Administrator sign-in.

use gateway::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::state::session::SessionState;
use crate::util::guard::install_signed_in_redirect;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(session, Role::Admin, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = (username.get().trim().to_owned(), password.get());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().admin_login(&user, &pass).await {
                    Ok(admin) => {
                        session.update(|s| s.sign_in_admin(admin));
                        navigate("/admin/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("admin login failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, user, pass);
    };

    view! {
        <div class="auth-page auth-page--admin">
            <div class="auth-card">
                <h1>"Admin Login"</h1>
                <Alert kind=AlertKind::Error message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Username"
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p>"Need an admin account? " <A href="/admin/signup">"Sign up"</A></p>
                <A href="/">"Back to Home"</A>
            </div>
        </div>
    }
}
