//! User management: server-side sort and status filter, local search,
//! and activate/suspend toggles.

use gateway::types::{AdminUser, StatusFilter, UserQuery, UserSortColumn};
use leptos::prelude::*;

use super::AdminLayout;
use crate::util::admin_filter::{search_users, sort_indicator};
use crate::util::history::display_date;

const COLUMNS: [(UserSortColumn, &str); 3] = [
    (UserSortColumn::FullName, "Name"),
    (UserSortColumn::Email, "Email"),
    (UserSortColumn::CreatedAt, "Joined"),
];

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let query = RwSignal::new(UserQuery::default());
    let search = RwSignal::new(String::new());
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let current = query.get();
        reload.track();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::gateway().list_users(&current).await {
                Ok(list) => {
                    users.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    let toggle_status = move |user: AdminUser| {
        let next = user.status().toggled();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::gateway().update_user_status(&user.id, next).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, next);
    };

    let visible = Memo::new(move |_| users.with(|list| search.with(|needle| search_users(list, needle))));

    view! {
        <AdminLayout title="User Management">
            <section class="filters">
                <input
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || query.with(|q| q.status.as_str())
                    on:change=move |ev| {
                        let status = StatusFilter::parse(&event_target_value(&ev));
                        query.update(|q| q.status = status);
                    }
                >
                    <option value="all">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="suspended">"Suspended"</option>
                </select>
            </section>
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading users..."</p> }>
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
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|u| (u.id.clone(), u.status.clone())
                            children=move |user| {
                                let status = user.status();
                                let target = user.clone();
                                view! {
                                    <tr>
                                        <td>{user.full_name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{display_date(&user.created_at)}</td>
                                        <td>
                                            <span class=format!("badge badge--{}", status.as_str())>{status.as_str()}</span>
                                        </td>
                                        <td>
                                            <button class="btn btn--link" on:click=move |_| toggle_status(target.clone())>
                                                {match status.toggled() {
                                                    gateway::types::UserStatus::Suspended => "Suspend",
                                                    gateway::types::UserStatus::Active => "Activate",
                                                }}
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
