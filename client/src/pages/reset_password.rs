//! Set a new password from an emailed `?token=` link.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::alert::{Alert, AlertKind};
use crate::util::forms::confirm_password;

const MISSING_TOKEN: &str = "Reset link is missing its token";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

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
        let Some(token) = query.with(|q| q.get("token")).filter(|t| !t.is_empty()) else {
            error.set(Some(MISSING_TOKEN.to_owned()));
            return;
        };
        let new_password = password.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().reset_password(&token, &new_password).await {
                    Ok(message) => {
                        success.set(Some(message));
                        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, token, new_password);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "New password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm new password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
