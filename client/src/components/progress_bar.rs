//! Upload progress indicator.

use gateway::upload::progress_label;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<Option<u8>>) -> impl IntoView {
    let value = move || percent.get().unwrap_or_default();

    view! {
        <Show when=move || percent.get().is_some()>
            <div class="progress">
                <div class="progress__track">
                    <div class="progress__fill" style:width=move || format!("{}%", value())></div>
                </div>
                <p class="progress__label">{move || format!("{} {}%", progress_label(value()), value())}</p>
                <Show when=move || (value() >= 100)>
                    <p class="progress__hint">"Analyzing document for AI content..."</p>
                </Show>
            </div>
        </Show>
    }
}
