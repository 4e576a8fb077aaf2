//! Horizontal AI-score bar used by history and admin tables.

use leptos::prelude::*;

use crate::util::score::bar_class;

/// Bar for a whole percentage in `0..=100`.
#[component]
pub fn ScoreBar(percent: u32) -> impl IntoView {
    let class = format!("score-bar {}", bar_class(f64::from(percent)));

    view! {
        <div class=class>
            <div class="score-bar__fill" style:width=format!("{percent}%")></div>
            <span class="score-bar__label">{format!("{percent}%")}</span>
        </div>
    }
}
