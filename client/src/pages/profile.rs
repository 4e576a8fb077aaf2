//! Profile editing: display name and optional password change.

use gateway::{GatewayError, Role};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::components::navbar::Navbar;
use crate::state::session::SessionState;
use crate::util::forms::ProfileForm;
use crate::util::guard::install_session_guard;

const UPDATED: &str = "Profile updated successfully. Redirecting...";
const UPDATE_FAILED: &str = "Failed to update profile. Please try again.";

/// Message shown when the update request fails.
fn failure_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Rejected { message, .. } | GatewayError::Validation(message) => message.clone(),
        GatewayError::Unauthorized { .. } => error.user_message(),
        _ => UPDATE_FAILED.to_owned(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_session_guard(session, Role::User, navigate.clone());

    let form = RwSignal::new(ProfileForm {
        full_name: session.with_untracked(|s| s.display_name(Role::User)),
        ..ProfileForm::default()
    });
    let email = move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Hydration loads the session after first render; seed the name once it arrives.
    Effect::new(move || {
        let name = session.with(|s| s.display_name(Role::User));
        if !name.is_empty() && form.with_untracked(|f| f.full_name.is_empty()) {
            form.update(|f| f.full_name = name);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let Some(user_id) = session.with_untracked(|s| s.user.as_ref().map(|u| u.id.clone())) else {
            return;
        };
        let update = match form.with(|f| f.to_update(&user_id)) {
            Ok(update) => update,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::gateway().update_profile(&update).await {
                    Ok(user) => {
                        session.update(|s| s.sign_in_user(user));
                        form.update(|f| {
                            f.current_password.clear();
                            f.new_password.clear();
                            f.confirm_password.clear();
                        });
                        success.set(Some(UPDATED.to_owned()));
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("profile update failed: {e}");
                        error.set(Some(failure_message(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, update);
    };

    let password_input = move |label: &'static str, field: fn(&mut ProfileForm) -> &mut String| {
        view! {
            <label>
                {label}
                <input
                    type="password"
                    prop:value=move || {
                        let mut current = form.get();
                        field(&mut current).clone()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| *field(f) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <Navbar/>
        <main class="page profile">
            <h1>"Profile"</h1>
            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input type="email" disabled prop:value=email/>
                </label>
                <label>
                    "Full name"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </label>
                <h2>"Change Password"</h2>
                <p class="page__hint">"Leave blank to keep your current password."</p>
                {password_input("Current password", |f| &mut f.current_password)}
                {password_input("New password", |f| &mut f.new_password)}
                {password_input("Confirm new password", |f| &mut f.confirm_password)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </main>
    }
}
