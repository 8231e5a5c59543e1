use approx::assert_relative_eq;
use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::{Bar, BarSeries, GridSpec, Viewport};
use barchart_rs::render::NullRenderer;

fn chart() -> BarChart<NullRenderer> {
    let mut chart = BarChart::new(
        NullRenderer::default(),
        BarChartConfig::new(Viewport::new(600, 400)),
    )
    .expect("chart init");
    chart.add_series(
        BarSeries::new(vec![Bar::new("Q1", 12.0), Bar::new("Q2", -3.0), Bar::new("Q3", 7.5)])
            .with_spacing(10.0),
    );
    chart.add_series(BarSeries::new(vec![Bar::new("Target", 40.0)]).with_y_axis("goal"));
    chart.set_grid(Some(GridSpec::new(3)));
    chart
}

#[test]
fn snapshot_reports_resolved_domains_and_series() {
    let snapshot = chart().snapshot().expect("snapshot");

    assert_eq!(snapshot.viewport, Viewport::new(600, 400));
    assert_eq!(snapshot.plot_bounds, (50.0, 30.0, 580.0, 350.0));
    assert_eq!(snapshot.axis_domains.get("default"), Some(&(-3.0, 12.0)));
    assert_eq!(snapshot.axis_domains.get("goal"), Some(&(0.0, 40.0)));

    assert_eq!(snapshot.series.len(), 2);
    let first = &snapshot.series[0];
    assert_relative_eq!(first.slot_width, (530.0 - 20.0) / 3.0, epsilon = 1e-9);
    assert_eq!(first.min_value, -3.0);
    assert_eq!(first.max_value, 12.0);
    assert_eq!(first.placements.len(), 3);
    assert_eq!(snapshot.series[1].y_axis.as_deref(), Some("goal"));

    assert_eq!(snapshot.grid_lines.len(), 4);
    assert_relative_eq!(snapshot.grid_lines[0].value, -3.0);
    assert_relative_eq!(snapshot.grid_lines[3].value, 12.0);
}

#[test]
fn snapshot_json_is_deterministic() {
    let chart = chart();
    let first = chart.snapshot_json_pretty().expect("json");
    let second = chart.snapshot_json_pretty().expect("json");
    assert_eq!(first, second);
    assert!(first.contains("\"axis_domains\""));

    let parsed: serde_json::Value = serde_json::from_str(&first).expect("parse snapshot");
    assert_eq!(parsed["series"].as_array().map(Vec::len), Some(2));
    assert_eq!(parsed["grid_lines"].as_array().map(Vec::len), Some(4));
    assert_eq!(parsed["series"][1]["placements"][0]["label"]["text"], "Target");
}
