use gateway::types::{MonthCount, ScoreBucket};

use super::*;

fn frame() -> Frame {
    Frame { width: 100.0, height: 100.0, padding: 10.0 }
}

#[test]
fn result_slices_split_score() {
    let result = UploadResult { similarity_score: Some(0.3), ..UploadResult::default() };
    let slices = result_slices(&result);
    assert_eq!(slices[0].label, "AI-Generated");
    assert_eq!(slices[0].value, 30.0);
    assert_eq!(slices[1].label, "Human-Written");
    assert_eq!(slices[1].value, 70.0);
}

#[test]
fn line_points_span_the_plot_area() {
    let points = line_points(&[0.0, 50.0, 100.0], frame(), Some(100.0));
    assert_eq!(points, vec![(10.0, 90.0), (50.0, 50.0), (90.0, 10.0)]);
}

#[test]
fn line_points_autoscale_and_clamp() {
    let points = line_points(&[2.0, 4.0], frame(), None);
    assert_eq!(points, vec![(10.0, 50.0), (90.0, 10.0)]);

    let clamped = line_points(&[150.0], frame(), Some(100.0));
    assert_eq!(clamped, vec![(50.0, 10.0)]);
}

#[test]
fn all_zero_values_sit_on_the_baseline() {
    let points = line_points(&[0.0, 0.0], frame(), None);
    assert!(points.iter().all(|&(_, y)| y == 90.0));
}

#[test]
fn svg_points_are_space_separated_pairs() {
    assert_eq!(svg_points(&[(1.0, 2.0), (3.75, 4.0)]), "1.0,2.0 3.8,4.0");
    assert_eq!(svg_points(&[]), "");
}

#[test]
fn quarter_arc_ends_at_three_oclock() {
    let path = arc_path(50.0, 50.0, 40.0, 0.0, 0.25);
    assert_eq!(path, "M 50.00 50.00 L 50.00 10.00 A 40.00 40.00 0 0 1 90.00 50.00 Z");
}

#[test]
fn large_arc_flag_set_past_half() {
    let path = arc_path(50.0, 50.0, 40.0, 0.0, 0.75);
    assert!(path.contains(" 0 1 1 "));
}

#[test]
fn pie_skips_empty_slices() {
    let slices = vec![
        Slice { label: "AI-Generated".into(), value: 0.0, color: AI_COLOR },
        Slice { label: "Human-Written".into(), value: 100.0, color: HUMAN_COLOR },
    ];
    let paths = pie_paths(&slices, 50.0, 50.0, 40.0);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].1, HUMAN_COLOR);
    assert!(paths[0].0.ends_with('Z'));
}

#[test]
fn analytics_series_keep_backend_order() {
    let analytics = Analytics {
        documents_by_month: vec![
            MonthCount { month: "Jan".into(), count: 4 },
            MonthCount { month: "Feb".into(), count: 9 },
        ],
        ai_score_distribution: vec![ScoreBucket { range: "0-20%".into(), count: 3, percentage: 30.0 }],
        ..Analytics::default()
    };
    let docs = documents_by_month(&analytics);
    assert_eq!(docs.labels, vec!["Jan", "Feb"]);
    assert_eq!(docs.values, vec![4.0, 9.0]);
    assert_eq!(docs.max_value(), 9.0);
    assert_eq!(score_distribution(&analytics).labels, vec!["0-20%"]);
    assert!(user_growth(&analytics).is_empty());
}

#[test]
fn bars_scale_to_the_tallest_value() {
    let series = Series { label: "Uploads".into(), labels: vec!["AM".into(), "PM".into()], values: vec![2.0, 4.0] };
    let bars = bar_rects(&series, frame());

    assert_eq!(bars.len(), 2);
    assert_eq!((bars[0].y, bars[0].height), (50.0, 40.0));
    assert_eq!((bars[1].y, bars[1].height), (10.0, 80.0));
    assert!((bars[0].width - 28.0).abs() < 1e-9);
    assert!((bars[0].x - 16.0).abs() < 1e-9);
    assert!((bars[1].x - 56.0).abs() < 1e-9);
}

#[test]
fn zero_series_draws_flat_bars() {
    let series = Series { values: vec![0.0, 0.0], ..Series::default() };
    assert!(bar_rects(&series, frame()).iter().all(|b| b.height == 0.0 && b.y == 90.0));
    assert!(bar_rects(&Series::default(), frame()).is_empty());
}
