//! Admin overview: headline counters and the most recent uploads.

use gateway::types::DashboardStats;
use leptos::prelude::*;
use leptos_router::components::A;

use super::AdminLayout;
use crate::components::score_bar::ScoreBar;
use crate::util::history::display_date;
use crate::util::score::whole_percent;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::gateway().dashboard_stats().await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let cards = move || {
        stats.get().map(|s| {
            let tiles = [
                ("Total Documents", s.total_documents.to_string()),
                ("Total Users", s.total_users.to_string()),
                ("Documents Today", s.documents_today.to_string()),
                ("Average AI Score", format!("{}%", whole_percent(s.average_ai_score))),
            ];
            view! {
                <div class="card-grid">
                    {tiles
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="card stat">
                                    <span class="stat__label">{label}</span>
                                    <span class="stat__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h2>"Recent Documents"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"File"</th>
                            <th>"User"</th>
                            <th>"Uploaded"</th>
                            <th>"AI Score"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {s
                            .recent_documents
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <tr>
                                        <td>{d.file_name}</td>
                                        <td>{d.user_email}</td>
                                        <td>{display_date(&d.upload_date)}</td>
                                        <td>
                                            <ScoreBar percent=whole_percent(d.ai_score)/>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
        })
    };

    view! {
        <AdminLayout title="Dashboard">
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            {cards}
            <div class="admin__shortcuts">
                <A href="/admin/documents" attr:class="btn btn--ghost">"Manage Documents"</A>
                <A href="/admin/users" attr:class="btn btn--ghost">"Manage Users"</A>
                <A href="/admin/analytics" attr:class="btn btn--ghost">"View Analytics"</A>
            </div>
        </AdminLayout>
    }
}
