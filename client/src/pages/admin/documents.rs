//! Document management: backend filters and sort, local search, delete.

use gateway::types::{AdminDocument, DocumentQuery, DocumentSortColumn};
use leptos::prelude::*;

use super::AdminLayout;
use crate::components::score_bar::ScoreBar;
use crate::util::admin_filter::{search_documents, sort_indicator};
use crate::util::history::display_date;
use crate::util::score::whole_percent;

const CONFIRM_DELETE: &str = "Are you sure you want to delete this document?";

const COLUMNS: [(DocumentSortColumn, &str); 4] = [
    (DocumentSortColumn::FileName, "File"),
    (DocumentSortColumn::UserEmail, "User"),
    (DocumentSortColumn::UploadDate, "Uploaded"),
    (DocumentSortColumn::AiScore, "AI Score"),
];

fn confirmed() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(CONFIRM_DELETE).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[component]
pub fn AdminDocumentsPage() -> impl IntoView {
    let query = RwSignal::new(DocumentQuery::default());
    let search = RwSignal::new(String::new());
    let documents = RwSignal::new(Vec::<AdminDocument>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let current = query.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::gateway().list_documents(&current).await {
                Ok(list) => {
                    documents.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    let delete = move |id: String| {
        if !confirmed() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::gateway().delete_document(&id).await {
                Ok(()) => documents.update(|list| list.retain(|d| d.id != id)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let visible = Memo::new(move |_| documents.with(|list| search.with(|needle| search_documents(list, needle))));

    let bound = move |label: &'static str, kind: &'static str, field: fn(&mut DocumentQuery) -> &mut String| {
        view! {
            <label class="filters__field">
                {label}
                <input
                    type=kind
                    prop:value=move || {
                        let mut current = query.get();
                        field(&mut current).clone()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| *field(q) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <AdminLayout title="Document Management">
            <section class="filters">
                <input
                    type="search"
                    placeholder="Search by file name or user email"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                {bound("Min AI %", "number", |q| &mut q.ai_score_min)}
                {bound("Max AI %", "number", |q| &mut q.ai_score_max)}
                {bound("From", "date", |q| &mut q.date_from)}
                {bound("To", "date", |q| &mut q.date_to)}
            </section>
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading documents..."</p> }>
                <table class="table">
                    <thead>
                        <tr>
                            {COLUMNS
                                .into_iter()
                                .map(|(column, label)| {
                                    view! {
                                        <th
                                            class="sortable"
                                            on:click=move |_| query.update(|q| q.sort = q.sort.toggle(column))
                                        >
                                            {label}
                                            {move || query.with(|q| sort_indicator(&q.sort, &column))}
                                        </th>
                                    }
                                })
                                .collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|d| d.id.clone()
                            children=move |doc| {
                                let id = doc.id.clone();
                                view! {
                                    <tr>
                                        <td>{doc.file_name.clone()}</td>
                                        <td>{doc.user_email.clone()}</td>
                                        <td>{display_date(&doc.upload_date)}</td>
                                        <td>
                                            <ScoreBar percent=whole_percent(doc.ai_score)/>
                                        </td>
                                        <td>
                                            <button class="btn btn--danger" on:click=move |_| delete(id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </AdminLayout>
    }
}
