//! System settings editor.

use gateway::types::SystemSettings;
use leptos::prelude::*;

use super::AdminLayout;
use crate::components::alert::{Alert, AlertKind};

const SAVED: &str = "Settings updated successfully";
const BACKUP_INTERVALS: [&str; 3] = ["daily", "weekly", "monthly"];

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let settings = RwSignal::new(SystemSettings::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::gateway().settings().await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let current = settings.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::gateway().update_settings(&current).await {
                Ok(()) => success.set(Some(SAVED.to_owned())),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    };

    view! {
        <AdminLayout title="System Settings">
            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>
            <form class="settings-form" on:submit=on_submit>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.email_notifications)
                        on:change=move |ev| settings.update(|s| s.email_notifications = event_target_checked(&ev))
                    />
                    "Email notifications"
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.dark_mode)
                        on:change=move |ev| settings.update(|s| s.dark_mode = event_target_checked(&ev))
                    />
                    "Dark mode"
                </label>
                <label>
                    "AI detection threshold (%)"
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || settings.with(|s| s.ai_threshold.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                settings.update(|s| s.ai_threshold = value.min(100));
                            }
                        }
                    />
                </label>
                <label>
                    "Max file size (MB)"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || settings.with(|s| s.max_file_size.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                settings.update(|s| s.max_file_size = value);
                            }
                        }
                    />
                </label>
                <label>
                    "Allowed file types"
                    <input
                        type="text"
                        prop:value=move || settings.with(|s| s.allowed_file_types.clone())
                        on:input=move |ev| settings.update(|s| s.allowed_file_types = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Backup interval"
                    <select
                        prop:value=move || settings.with(|s| s.backup_interval.clone())
                        on:change=move |ev| settings.update(|s| s.backup_interval = event_target_value(&ev))
                    >
                        {BACKUP_INTERVALS
                            .iter()
                            .map(|interval| view! { <option value=*interval>{*interval}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Settings" }}
                </button>
            </form>
        </AdminLayout>
    }
}
