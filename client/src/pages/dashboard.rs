//! Upload screen: pick a document, send it for analysis, open the result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selection is validated as soon as the file input changes; bytes are only
//! read when the upload starts. An upload is attempted up to three times,
//! two seconds apart. A successful one stores the analysis in `ResultState`
//! and navigates to `/result`.

use gateway::Role;
use gateway::upload::{LOGIN_REQUIRED, MAX_UPLOAD_BYTES};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::progress_bar::ProgressBar;
use crate::state::result::ResultState;
use crate::state::session::SessionState;
use crate::state::upload::UploadState;
use crate::util::guard::install_session_guard;

fn size_label(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kib = bytes as f64 / 1024.0;
    if kib >= 1024.0 { format!("{:.2} MB", kib / 1024.0) } else { format!("{kib:.1} KB") }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    let navigate = use_navigate();
    install_session_guard(session, Role::User, navigate.clone());

    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let meta = file.as_ref().map(|f| (f.name(), f.size() as u64));
            let mut accepted = false;
            upload.update(|u| {
                u.select(meta.as_ref().map(|(n, s)| (n.as_str(), *s)));
                accepted = u.selected.is_some();
            });
            picked.set_value(file.filter(|_| accepted));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_upload = move |_| {
        let Some(user) = session.with_untracked(|s| s.user.clone()).filter(|u| !u.id.is_empty()) else {
            upload.update(|u| u.error = Some(LOGIN_REQUIRED.to_owned()));
            return;
        };
        let mut started = false;
        upload.update(|u| started = u.start());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let Some(file) = picked.get_value() else {
                upload.update(|u| u.fail(gateway::upload::NO_FILE_SELECTED.to_owned()));
                return;
            };
            leptos::task::spawn_local(async move {
                let document = match crate::net::read_document(&file).await {
                    Ok(document) => document,
                    Err(e) => {
                        upload.update(|u| u.fail(e.user_message()));
                        return;
                    }
                };
                let api = crate::net::gateway();
                let report = move |percent: u8| upload.update(|u| u.report(percent));
                let progress: gateway::Progress<'_> = &report;
                let mut left = gateway::upload::UPLOAD_ATTEMPTS;
                loop {
                    left -= 1;
                    match api.upload_document(&user, document.clone(), Some(progress)).await {
                        Ok(analysis) => {
                            upload.update(UploadState::finish);
                            picked.set_value(None);
                            result.set(ResultState { current: Some(analysis) });
                            navigate("/result", leptos_router::NavigateOptions::default());
                            return;
                        }
                        Err(e) => {
                            log::warn!("upload failed ({left} attempts left): {e}");
                            let mut again = false;
                            upload.update(|u| again = u.attempt_failed(&e, left));
                            if !again {
                                return;
                            }
                            let pause = std::time::Duration::from_millis(gateway::upload::UPLOAD_RETRY_PAUSE_MS);
                            gloo_timers::future::sleep(pause).await;
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, result);
    };

    let error = move || upload.with(|u| u.error.clone());
    let selected = move || upload.with(|u| u.selected.clone());
    let progress = Signal::derive(move || upload.with(|u| u.progress));
    let busy = move || upload.with(|u| u.busy);

    view! {
        <Navbar/>
        <main class="page dashboard">
            <h1>"Upload Document"</h1>
            <p class="page__hint">
                {format!(
                    "Supported formats: .txt, .doc, .docx, .pdf (max {} MB)",
                    MAX_UPLOAD_BYTES / (1024 * 1024),
                )}
            </p>
            <div class="upload-card">
                <input
                    type="file"
                    accept=".txt,.doc,.docx,.pdf"
                    disabled=busy
                    on:change=on_change
                />
                {move || {
                    selected()
                        .map(|s| {
                            view! {
                                <p class="upload-card__file">
                                    {format!("Selected: {} ({})", s.name, size_label(s.size))}
                                </p>
                            }
                        })
                }}
                {move || error().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                <ProgressBar percent=progress/>
                <button class="btn btn--primary" on:click=on_upload disabled=busy>
                    {move || if busy() { "Uploading..." } else { "Upload & Analyze" }}
                </button>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::size_label;

    #[test]
    fn sizes_switch_to_megabytes() {
        assert_eq!(size_label(512), "0.5 KB");
        assert_eq!(size_label(3 * 1024 * 1024), "3.00 MB");
    }
}
