//! Upload history with client-side filters and an AI-score trend.

use gateway::Role;
use gateway::types::{UploadRecord, UploadResult};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::charts::LineChart;
use crate::components::navbar::Navbar;
use crate::components::score_bar::ScoreBar;
use crate::state::result::ResultState;
use crate::state::session::SessionState;
use crate::util::guard::install_session_guard;
use crate::util::history::{HistoryFilters, display_date, trend_series};
use crate::util::score::ai_percent;

const NO_HISTORY: &str = "No upload history found.";

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    install_session_guard(session, Role::User, use_navigate());

    let records = RwSignal::new(Vec::<UploadRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let filters = RwSignal::new(HistoryFilters::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(user_id) = session.with(|s| s.user.as_ref().map(|u| u.id.clone())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::gateway().fetch_history(&user_id).await {
                Ok(list) => records.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| filters.with(|f| records.with(|r| f.apply(r))));
    let trend = Signal::derive(move || trend_series(&filtered.get()));

    let filter_input = move |label: &'static str, kind: &'static str, field: fn(&mut HistoryFilters) -> &mut String| {
        view! {
            <label class="filters__field">
                {label}
                <input
                    type=kind
                    prop:value=move || {
                        let mut current = filters.get();
                        field(&mut current).clone()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| *field(f) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <Navbar/>
        <main class="page history">
            <h1>"Upload History"</h1>
            <section class="filters">
                {filter_input("Search file name", "text", |f| &mut f.search)}
                {filter_input("Min AI %", "number", |f| &mut f.ai_score_min)}
                {filter_input("Max AI %", "number", |f| &mut f.ai_score_max)}
                {filter_input("From", "date", |f| &mut f.date_from)}
                {filter_input("To", "date", |f| &mut f.date_to)}
                <button
                    class="btn btn--ghost"
                    disabled=move || filters.with(HistoryFilters::is_empty)
                    on:click=move |_| filters.set(HistoryFilters::default())
                >
                    "Clear Filters"
                </button>
            </section>
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading history..."</p> }>
                <Show
                    when=move || filtered.with(|r| !r.is_empty())
                    fallback=|| view! { <div class="alert alert--info">{NO_HISTORY}</div> }
                >
                    <section class="history__trend">
                        <h2>"AI Score Trend"</h2>
                        <LineChart series=trend y_max=100.0/>
                    </section>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"File"</th>
                                <th>"Uploaded"</th>
                                <th>"AI Score"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || filtered.get()
                                key=|r| r.id.clone()
                                children=move |record| {
                                    let opened = UploadResult::from(&record);
                                    view! {
                                        <tr>
                                            <td>{record.file_name.clone()}</td>
                                            <td>{display_date(&record.upload_date)}</td>
                                            <td>
                                                <ScoreBar percent=ai_percent(record.similarity_score)/>
                                            </td>
                                            <td>
                                                <a
                                                    class="btn btn--link"
                                                    href="/result"
                                                    on:click=move |_| {
                                                        result.set(ResultState { current: Some(opened.clone()) });
                                                    }
                                                >
                                                    "View"
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </main>
    }
}
