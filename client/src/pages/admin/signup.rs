//! Administrator account creation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::util::forms::AdminSignupForm;

const CREATED: &str = "Account created successfully! Please login.";

#[component]
pub fn AdminSignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(AdminSignupForm::default());
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
        let signup = match form.with(AdminSignupForm::to_signup) {
            Ok(signup) => signup,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        log::info!("admin signup for {}", signup.username);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().admin_signup(&signup).await {
                    Ok(()) => {
                        success.set(Some(CREATED.to_owned()));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/admin/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, signup);
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&mut AdminSignupForm) -> &mut String| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    required
                    prop:value=move || {
                        let mut current = form.get();
                        get(&mut current).clone()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| *get(f) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="auth-page auth-page--admin">
            <div class="auth-card">
                <h1>"Admin Sign Up"</h1>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
                <form class="auth-form" on:submit=on_submit>
                    {field("Username", "text", |f| &mut f.username)}
                    {field("Full name", "text", |f| &mut f.full_name)}
                    {field("Email", "email", |f| &mut f.email)}
                    {field("Password", "password", |f| &mut f.password)}
                    {field("Confirm password", "password", |f| &mut f.confirm_password)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p>"Already have an account? " <A href="/admin/login">"Sign in"</A></p>
            </div>
        </div>
    }
}
