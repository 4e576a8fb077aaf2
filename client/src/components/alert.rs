//! Dismissable inline message.

use leptos::prelude::*;

/// Visual flavor of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert--error",
            Self::Success => "alert alert--success",
            Self::Info => "alert alert--info",
        }
    }
}

/// Renders `message` while it is `Some`; the close button clears it.
#[component]
pub fn Alert(kind: AlertKind, message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=kind.class() role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="alert__close" on:click=move |_| message.set(None)>"×"</button>
            </div>
        </Show>
    }
}
