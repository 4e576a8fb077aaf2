//! Request a password reset email.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{Alert, AlertKind};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        error.set(None);
        success.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::gateway().forgot_password(&email_value).await {
                Ok(message) => success.set(Some(message)),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
                <p>"Enter your email and we'll send you a reset link."</p>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                </form>
                <A href="/login">"Back to Login"</A>
            </div>
        </div>
    }
}
