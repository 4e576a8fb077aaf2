//! Inline SVG charts.
//!
//! Geometry lives in `util::chart`; these components only lay out SVG
//! elements and an HTML legend.

use leptos::prelude::*;

use crate::util::chart::{Frame, Series, Slice, TREND_COLOR, bar_rects, line_points, pie_paths, svg_points};

const PIE_SIZE: f64 = 200.0;

/// Pie chart with a legend listing each slice's percentage.
#[component]
pub fn PieChart(slices: Vec<Slice>) -> impl IntoView {
    let half = PIE_SIZE / 2.0;
    let paths = pie_paths(&slices, half, half, half - 4.0);
    let legend = slices
        .iter()
        .map(|s| {
            view! {
                <li>
                    <span class="legend__swatch" style:background-color=s.color></span>
                    {format!("{}: {}%", s.label, s.value)}
                </li>
            }
        })
        .collect_view();

    view! {
        <figure class="chart chart--pie">
            <svg viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}") role="img">
                {paths
                    .into_iter()
                    .map(|(d, color, label)| view! { <path d=d fill=color aria-label=label/> })
                    .collect_view()}
            </svg>
            <ul class="legend">{legend}</ul>
        </figure>
    }
}

/// Line chart over `series`; `y_max` pins the top of the axis.
#[component]
pub fn LineChart(#[prop(into)] series: Signal<Series>, #[prop(optional)] y_max: Option<f64>) -> impl IntoView {
    let frame = Frame::default();
    let points = move || series.with(|s| line_points(&s.values, frame, y_max));

    view! {
        <figure class="chart chart--line">
            <Show
                when=move || series.with(|s| !s.is_empty())
                fallback=|| view! { <p class="chart__empty">"No data to display"</p> }
            >
                <svg viewBox=format!("0 0 {} {}", frame.width, frame.height) role="img">
                    <line
                        class="chart__axis"
                        x1=frame.padding.to_string()
                        y1=(frame.height - frame.padding).to_string()
                        x2=(frame.width - frame.padding).to_string()
                        y2=(frame.height - frame.padding).to_string()
                    />
                    <polyline fill="none" stroke=TREND_COLOR stroke-width="2" points=move || svg_points(&points())/>
                    {move || {
                        points()
                            .into_iter()
                            .map(|(x, y)| view! { <circle cx=format!("{x:.1}") cy=format!("{y:.1}") r="3" fill=TREND_COLOR/> })
                            .collect_view()
                    }}
                </svg>
                <figcaption class="chart__caption">
                    <strong>{move || series.with(|s| s.label.clone())}</strong>
                    <ol class="chart__labels">
                        {move || {
                            series
                                .with(|s| {
                                    s.labels
                                        .iter()
                                        .zip(&s.values)
                                        .map(|(l, v)| format!("{l}: {v}"))
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .map(|text| view! { <li>{text}</li> })
                                .collect_view()
                        }}
                    </ol>
                </figcaption>
            </Show>
        </figure>
    }
}

/// Vertical bars over `series`, labelled underneath.
#[component]
pub fn BarChart(#[prop(into)] series: Signal<Series>) -> impl IntoView {
    let frame = Frame::default();
    let bars = move || series.with(|s| bar_rects(s, frame));

    view! {
        <figure class="chart chart--bar">
            <Show
                when=move || series.with(|s| !s.is_empty())
                fallback=|| view! { <p class="chart__empty">"No data to display"</p> }
            >
                <svg viewBox=format!("0 0 {} {}", frame.width, frame.height) role="img">
                    {move || {
                        bars()
                            .into_iter()
                            .map(|b| {
                                view! {
                                    <rect
                                        x=format!("{:.1}", b.x)
                                        y=format!("{:.1}", b.y)
                                        width=format!("{:.1}", b.width)
                                        height=format!("{:.1}", b.height)
                                        fill=TREND_COLOR
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </svg>
                <ol class="chart__labels">
                    {move || {
                        series
                            .with(|s| s.labels.clone())
                            .into_iter()
                            .map(|label| view! { <li>{label}</li> })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </figure>
    }
}
