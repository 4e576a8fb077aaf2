//! Analysis view for the most recent upload (or a history entry).

use gateway::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::charts::PieChart;
use crate::components::navbar::Navbar;
use crate::state::result::ResultState;
use crate::state::session::SessionState;
use crate::util::chart::result_slices;
use crate::util::guard::install_session_guard;
use crate::util::highlight::segment;
use crate::util::report::export_pdf;
use crate::util::score::{ai_percent, human_percent};

const NO_RESULT: &str = "No result data found. Please upload a document first.";

#[component]
pub fn ResultPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    install_session_guard(session, Role::User, use_navigate());

    let body = move || {
        let Some(analysis) = result.get().current else {
            return view! {
                <div class="alert alert--info">{NO_RESULT}</div>
                <A href="/dashboard" attr:class="btn btn--primary">"Go to Dashboard"</A>
            }
            .into_any();
        };

        let score = analysis.similarity_score.unwrap_or_default();
        let file_name = analysis.file_name.clone().unwrap_or_else(|| "Untitled".to_owned());
        let export_name = analysis.file_name.clone();
        let words = segment(analysis.content.as_deref(), analysis.ai_parts.as_deref());

        view! {
            <header class="result__header">
                <h1>"Analysis Result"</h1>
                <p class="result__file">{file_name}</p>
            </header>
            <section class="result__summary">
                <PieChart slices=result_slices(&analysis)/>
                <dl class="result__scores">
                    <dt>"AI-Generated"</dt>
                    <dd class="score score--ai">{format!("{}%", ai_percent(score))}</dd>
                    <dt>"Human-Written"</dt>
                    <dd class="score score--human">{format!("{}%", human_percent(score))}</dd>
                </dl>
            </section>
            <section class="result__text">
                <h2>"Highlighted Content"</h2>
                {match words {
                    Some(words) => {
                        view! {
                            <p class="highlighted">
                                {words
                                    .into_iter()
                                    .map(|w| {
                                        let class = w.class();
                                        view! { <span class=class>{w.text}</span> " " }
                                    })
                                    .collect_view()}
                            </p>
                        }
                            .into_any()
                    }
                    None => view! { <p class="result__empty">"No content to analyze"</p> }.into_any(),
                }}
                <p class="legend">
                    <span class="ai-text">"AI-generated"</span>
                    " "
                    <span class="human-text">"Human-written"</span>
                </p>
            </section>
            <div class="result__actions">
                <button class="btn btn--primary" on:click=move |_| export_pdf(export_name.as_deref())>
                    "Export as PDF"
                </button>
                <A href="/dashboard" attr:class="btn btn--ghost">"Upload Another File"</A>
                <A href="/history" attr:class="btn btn--ghost">"View History"</A>
            </div>
        }
        .into_any()
    };

    view! {
        <Navbar/>
        <main class="page result">{body}</main>
    }
}
