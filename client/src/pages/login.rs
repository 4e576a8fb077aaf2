//! User sign-in with email and password.

use gateway::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::state::session::SessionState;
use crate::util::guard::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(session, Role::User, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().login_user(&email_value, &password_value).await {
                    Ok(user) => {
                        session.update(|s| s.sign_in_user(user));
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, email_value, password_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"PlagiGuard Login"</h1>
                <Alert kind=AlertKind::Error message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email address"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                <A href="/forgot-password">"Forgot Password?"</A>
                <p>"Don't have an account? " <A href="/register">"Register here"</A></p>
                <A href="/">"Back to Home"</A>
            </div>
        </div>
    }
}
