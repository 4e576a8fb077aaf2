//! Account registration.

use gateway::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::state::session::SessionState;
use crate::util::forms::confirm_password;
use crate::util::guard::install_signed_in_redirect;

const REGISTERED: &str = "Registration successful! Please log in.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(session, Role::User, navigate.clone());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        if let Err(e) = confirm_password(&password.get(), &confirm.get()) {
            error.set(Some(e.user_message()));
            return;
        }
        let (name, mail, pass) = (full_name.get().trim().to_owned(), email.get().trim().to_owned(), password.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().register_user(&name, &mail, &pass).await {
                    Ok(Some(user)) => {
                        session.update(|s| s.sign_in_user(user));
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Ok(None) => {
                        success.set(Some(REGISTERED.to_owned()));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, name, mail, pass);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <label>
                        "Confirm password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p>"Already registered? " <A href="/login">"Sign in"</A></p>
            </div>
        </div>
    }
}
