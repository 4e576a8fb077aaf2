//! Usage analytics: monthly documents, user growth, score distribution,
//! and upload times.

use gateway::types::Analytics;
use leptos::prelude::*;

use super::AdminLayout;
use crate::components::charts::{BarChart, LineChart};
use crate::util::chart::{documents_by_month, score_distribution, upload_times, user_growth};
use crate::util::score::whole_percent;

#[component]
pub fn AdminAnalyticsPage() -> impl IntoView {
    let analytics = RwSignal::new(Analytics::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::gateway().analytics().await {
            Ok(loaded) => analytics.set(loaded),
            Err(e) => error.set(Some(e.user_message())),
        }
        loading.set(false);
    });

    let documents = Signal::derive(move || analytics.with(documents_by_month));
    let growth = Signal::derive(move || analytics.with(user_growth));
    let buckets = Signal::derive(move || analytics.with(score_distribution));
    let periods = Signal::derive(move || analytics.with(upload_times));

    let distribution = move || {
        analytics.with(|a| {
            a.ai_score_distribution
                .iter()
                .map(|b| {
                    view! {
                        <tr>
                            <td>{b.range.clone()}</td>
                            <td>{b.count}</td>
                            <td>{format!("{:.1}%", b.percentage)}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };
    let time_rows = move || {
        analytics.with(|a| {
            a.upload_times
                .iter()
                .map(|slot| {
                    view! {
                        <tr>
                            <td>{slot.period.clone()}</td>
                            <td>{slot.uploads}</td>
                            <td>{format!("{}%", whole_percent(slot.avg_score))}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <AdminLayout title="Analytics">
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading analytics..."</p> }>
                <section class="analytics__charts">
                    <div class="card">
                        <h2>"Documents by Month"</h2>
                        <LineChart series=documents/>
                    </div>
                    <div class="card">
                        <h2>"User Growth"</h2>
                        <LineChart series=growth/>
                    </div>
                </section>
                <section class="analytics__tables">
                    <div class="card">
                        <h2>"AI Score Distribution"</h2>
                        <BarChart series=buckets/>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Range"</th>
                                    <th>"Documents"</th>
                                    <th>"Share"</th>
                                </tr>
                            </thead>
                            <tbody>{distribution}</tbody>
                        </table>
                    </div>
                    <div class="card">
                        <h2>"Upload Times"</h2>
                        <BarChart series=periods/>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Period"</th>
                                    <th>"Uploads"</th>
                                    <th>"Avg AI Score"</th>
                                </tr>
                            </thead>
                            <tbody>{time_rows}</tbody>
                        </table>
                    </div>
                </section>
            </Show>
        </AdminLayout>
    }
}
