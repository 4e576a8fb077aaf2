//! Geometry for the inline SVG charts.
//!
//! Charts render as plain SVG (`components::charts`); this module owns the
//! data shaping and coordinate math so it can be tested without a DOM.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

use gateway::types::{Analytics, UploadResult};

use crate::util::score::{ai_percent, human_percent};

pub const AI_COLOR: &str = "#e74c3c";
pub const HUMAN_COLOR: &str = "#2ecc71";
pub const TREND_COLOR: &str = "#3498db";

/// Labeled numeric series for line and bar charts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// One pie/doughnut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// AI-generated versus human-written split for a single result.
pub fn result_slices(result: &UploadResult) -> Vec<Slice> {
    let score = result.similarity_score.unwrap_or_default();
    vec![
        Slice { label: "AI-Generated".to_owned(), value: f64::from(ai_percent(score)), color: AI_COLOR },
        Slice { label: "Human-Written".to_owned(), value: f64::from(human_percent(score)), color: HUMAN_COLOR },
    ]
}

/// Plot area in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self { width: 600.0, height: 240.0, padding: 32.0 }
    }
}

/// Map series values into the frame. `y_max` of `None` scales to the
/// largest value; a zero range collapses to the baseline.
pub fn line_points(values: &[f64], frame: Frame, y_max: Option<f64>) -> Vec<(f64, f64)> {
    let top = y_max.unwrap_or_else(|| values.iter().copied().fold(0.0, f64::max));
    let plot_w = frame.width - 2.0 * frame.padding;
    let plot_h = frame.height - 2.0 * frame.padding;
    let baseline = frame.height - frame.padding;

    #[allow(clippy::cast_precision_loss)]
    let step = if values.len() > 1 { plot_w / (values.len() - 1) as f64 } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if values.len() == 1 { frame.width / 2.0 } else { frame.padding + step * i as f64 };
            let ratio = if top > 0.0 { (v / top).clamp(0.0, 1.0) } else { 0.0 };
            (x, baseline - ratio * plot_h)
        })
        .collect()
}

/// One bar in SVG user units, `y` being the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Evenly spaced bars scaled to the series maximum, each taking
/// `BAR_FILL` of its slot.
pub fn bar_rects(series: &Series, frame: Frame) -> Vec<Bar> {
    const BAR_FILL: f64 = 0.7;

    if series.is_empty() {
        return Vec::new();
    }
    let top = series.max_value();
    let plot_w = frame.width - 2.0 * frame.padding;
    let plot_h = frame.height - 2.0 * frame.padding;
    let baseline = frame.height - frame.padding;

    #[allow(clippy::cast_precision_loss)]
    let slot = plot_w / series.values.len() as f64;
    let width = slot * BAR_FILL;
    series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let height = if top > 0.0 { (v / top).clamp(0.0, 1.0) * plot_h } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let x = frame.padding + slot * i as f64 + (slot - width) / 2.0;
            Bar { x, y: baseline - height, width, height }
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.1},{y:.1}");
    }
    out
}

/// Path data for one pie slice, starting at twelve o'clock and sweeping
/// clockwise. `start` and `fraction` are shares of the full circle.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction >= 1.0 {
        return format!(
            "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - r,
            bottom = cy + r,
        );
    }
    let point = |share: f64| {
        let angle = share * TAU - FRAC_PI_2;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let (x0, y0) = point(start);
    let (x1, y1) = point(start + fraction);
    let large = u8::from(fraction > 0.5);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z")
}

/// Per-slice `(path, color, label)` for a pie, skipping empty slices.
pub fn pie_paths(slices: &[Slice], cx: f64, cy: f64, r: f64) -> Vec<(String, &'static str, String)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    slices
        .iter()
        .filter(|s| s.value > 0.0)
        .map(|s| {
            let fraction = s.value / total;
            let path = arc_path(cx, cy, r, start, fraction);
            start += fraction;
            (path, s.color, s.label.clone())
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn counts(label: &str, items: impl Iterator<Item = (String, u64)>) -> Series {
    let (labels, values) = items.map(|(l, c)| (l, c as f64)).unzip();
    Series { label: label.to_owned(), labels, values }
}

pub fn documents_by_month(analytics: &Analytics) -> Series {
    counts("Documents", analytics.documents_by_month.iter().map(|m| (m.month.clone(), m.count)))
}

pub fn user_growth(analytics: &Analytics) -> Series {
    counts("New Users", analytics.user_growth.iter().map(|m| (m.month.clone(), m.count)))
}

pub fn score_distribution(analytics: &Analytics) -> Series {
    counts("Documents", analytics.ai_score_distribution.iter().map(|b| (b.range.clone(), b.count)))
}

pub fn upload_times(analytics: &Analytics) -> Series {
    counts("Uploads", analytics.upload_times.iter().map(|s| (s.period.clone(), s.uploads)))
}
