use approx::assert_abs_diff_eq;
use line_chart_rs::api::{LineChartConfig, LineChartEngine};
use line_chart_rs::core::{
    AxisMode, Frame, HitResult, LabelSource, LineShape, PathCommand, ScaledPoint, index_label,
};
use line_chart_rs::interaction::ChartState;
use line_chart_rs::render::NullRenderer;

fn engine_with(config: LineChartConfig, series: &[f64]) -> LineChartEngine<NullRenderer> {
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(series.to_vec()).expect("set data");
    engine
}

fn explicit_points(commands: &[PathCommand]) -> Vec<ScaledPoint> {
    commands
        .iter()
        .filter_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::QuadTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        })
        .collect()
}

#[test]
fn end_to_end_scenario_matches_reference_geometry() {
    let config = LineChartConfig::with_frame(Frame::new(100.0, 100.0, 0.0))
        .with_shape(LineShape::Straight);
    let engine = engine_with(config, &[12.0, -230.0, 10.0, 54.0]);

    let fill = engine.fill_path().expect("fill").expect("filled by default");
    assert_abs_diff_eq!(fill.first_point().expect("first").y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fill.last_point().expect("last").y, 100.0, epsilon = 1e-9);

    let stroke = engine.stroke_path().expect("stroke");
    let points = explicit_points(stroke.commands());
    assert_eq!(points.len(), 4);
    let expected_x = [0.0, 33.333_333, 66.666_667, 100.0];
    for (point, x) in points.iter().zip(expected_x) {
        assert_abs_diff_eq!(point.x, x, epsilon = 1e-5);
    }
    for pair in points.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
    // -230 is the minimum and sits on the baseline, 54 is the maximum.
    assert_abs_diff_eq!(points[1].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[3].y, 0.0, epsilon = 1e-9);
}

#[test]
fn end_to_end_curved_scenario_keeps_baseline_closure() {
    let config = LineChartConfig::with_frame(Frame::new(100.0, 100.0, 0.0));
    let engine = engine_with(config, &[12.0, -230.0, 10.0, 54.0]);

    let fill = engine.fill_path().expect("fill").expect("filled");
    assert_eq!(fill.first_point(), Some(ScaledPoint::new(0.0, 100.0)));
    assert_abs_diff_eq!(fill.last_point().expect("last").x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fill.last_point().expect("last").y, 100.0, epsilon = 1e-9);
    assert_eq!(engine.stroke_path().expect("stroke").segment_count(), 6);
}

#[test]
fn fill_can_be_disabled() {
    let config = LineChartConfig::new(320.0, 160.0).with_fill(false);
    let engine = engine_with(config, &[1.0, 2.0]);
    assert!(engine.fill_path().expect("fill").is_none());
}

#[test]
fn domain_override_replaces_series_range() {
    let config = LineChartConfig::with_frame(Frame::new(100.0, 100.0, 0.0))
        .with_shape(LineShape::Straight)
        .with_domain(0.0, 200.0);
    let engine = engine_with(config, &[50.0, 100.0]);

    let points = engine.scaled_points().expect("points");
    assert_abs_diff_eq!(points[0].y, 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 50.0, epsilon = 1e-9);
}

#[test]
fn set_data_rejects_non_finite_samples_and_keeps_previous_series() {
    let mut engine = engine_with(LineChartConfig::new(100.0, 100.0), &[1.0, 2.0]);
    assert!(engine.set_data(vec![1.0, f64::NAN, 3.0]).is_err());
    assert!(engine.set_data(vec![f64::INFINITY]).is_err());
    assert_eq!(engine.series(), &[1.0, 2.0]);

    engine.clear_data();
    assert!(engine.series().is_empty());
    assert!(engine.stroke_path().expect("stroke").is_empty());
}

#[test]
fn invalid_frames_are_rejected_at_the_boundary() {
    let result = LineChartEngine::new(NullRenderer::default(), LineChartConfig::new(-1.0, 10.0));
    assert!(result.is_err());

    let mut engine = engine_with(LineChartConfig::new(100.0, 100.0), &[1.0, 2.0]);
    assert!(engine.set_frame(Frame::new(10.0, f64::NAN, 0.0)).is_err());
    assert_eq!(engine.config().frame, Frame::new(100.0, 100.0, 30.0));

    engine.set_frame(Frame::new(200.0, 50.0, 0.0)).expect("resize");
    let points = engine.scaled_points().expect("points");
    assert_abs_diff_eq!(points[1].x, 200.0, epsilon = 1e-9);
}

#[test]
fn geometry_follows_the_current_series() {
    let config = LineChartConfig::with_frame(Frame::new(100.0, 100.0, 0.0))
        .with_shape(LineShape::Straight);
    let mut engine = engine_with(config, &[0.0, 10.0]);
    let before = engine.pointer_move(ChartState::default(), 50.0).expect("pointer").1;
    assert_abs_diff_eq!(before.hit.y, 50.0, epsilon = 0.05);

    engine.set_data(vec![10.0, 0.0, 10.0]).expect("set data");
    let after = engine.pointer_move(ChartState::default(), 50.0).expect("pointer").1;
    assert_abs_diff_eq!(after.hit.y, 100.0, epsilon = 0.05);
}

#[test]
fn pointer_move_reports_hit_and_snapped_sample() {
    let config = LineChartConfig::with_frame(Frame::new(300.0, 100.0, 0.0))
        .with_shape(LineShape::Straight);
    let engine = engine_with(config, &[8.0, 23.0, 54.0, 32.0]);

    let (state, readout) = engine
        .pointer_move(ChartState::default(), 110.0)
        .expect("pointer");
    assert_eq!(state.touch_x, Some(110.0));
    assert!(state.is_touching());

    let sample = readout.sample.expect("snapped");
    assert_eq!(sample.index, 1);
    assert_eq!(sample.value, 23.0);
    assert_abs_diff_eq!(sample.point.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(readout.hit.x, 110.0, epsilon = 0.02);

    let left = engine.pointer_leave(state);
    assert!(!left.is_touching());
    assert_eq!(engine.readout(left).expect("readout"), None);
    assert_eq!(
        engine.readout(state).expect("readout").map(|r| r.sample),
        Some(readout.sample)
    );
}

#[test]
fn pointer_outside_series_clamps_hit_but_has_no_sample() {
    let config = LineChartConfig::with_frame(Frame::new(300.0, 100.0, 0.0))
        .with_shape(LineShape::Straight);
    let engine = engine_with(config, &[8.0, 23.0, 54.0, 32.0]);

    let (_, readout) = engine
        .pointer_move(ChartState::default(), 900.0)
        .expect("pointer");
    assert!(readout.sample.is_none());
    assert_abs_diff_eq!(readout.hit.x, 300.0, epsilon = 1e-9);

    assert!(engine.pointer_move(ChartState::default(), f64::NAN).is_err());
}

#[test]
fn pointer_on_short_series_returns_zero_point() {
    let engine = engine_with(LineChartConfig::new(300.0, 100.0), &[42.0]);
    let (_, readout) = engine
        .pointer_move(ChartState::default(), 10.0)
        .expect("pointer");
    assert_eq!(readout.hit, HitResult::ZERO);
    assert_eq!(readout.sample.map(|sample| sample.index), Some(0));
}

#[test]
fn snapped_sample_follows_y_offset() {
    let config = LineChartConfig::with_frame(Frame::new(100.0, 100.0, 0.0))
        .with_shape(LineShape::Straight)
        .with_y_offset(-10.0);
    let engine = engine_with(config, &[0.0, 10.0]);
    let (_, readout) = engine
        .pointer_move(ChartState::default(), 100.0)
        .expect("pointer");
    let sample = readout.sample.expect("snapped");
    assert_abs_diff_eq!(sample.point.y, -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(readout.hit.y, -10.0, epsilon = 1e-9);
}

#[test]
fn axis_layout_uses_injected_formatter() {
    let data = [
        282.502, 284.495, 283.51, 285.019, 285.197, 286.118, 288.737, 288.455, 289.391,
    ];
    let config = LineChartConfig::new(300.0, 300.0)
        .with_gridlines(AxisMode::Automatic)
        .with_labels(AxisMode::Automatic);
    let engine = engine_with(config, &data);

    let layout = engine
        .axis_layout(|index| format!("{} NOV", index + 1))
        .expect("layout");
    assert_eq!(layout.gridlines.len(), 5);
    let labels: Vec<&str> = layout.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(labels, vec!["1 NOV", "3 NOV", "5 NOV", "7 NOV", "9 NOV"]);

    let default_labels = engine.axis_layout(index_label).expect("layout");
    assert_eq!(default_labels.labels[4].text, "8");
}

#[test]
fn gridlines_share_rows_with_offset_stroke_points() {
    let config = LineChartConfig::with_frame(Frame::new(300.0, 200.0, 20.0))
        .with_shape(LineShape::Straight)
        .with_y_offset(15.0)
        .with_gridlines(AxisMode::Fixed(3));
    let engine = engine_with(config, &[0.0, 5.0, 10.0]);

    let stroke = engine.stroke_path().expect("stroke");
    let points = explicit_points(stroke.commands());
    let layout = engine.axis_layout(index_label).expect("layout");

    assert_eq!(layout.gridlines.len(), 3);
    for (gridline, point) in layout.gridlines.iter().zip(&points) {
        assert_abs_diff_eq!(gridline.y, point.y, epsilon = 1e-9);
    }
    assert_eq!(layout.gridlines[1].text, "5");
}

#[test]
fn tile_label_source_passes_tile_ordinals_to_formatter() {
    let data = [
        282.502, 284.495, 283.51, 285.019, 285.197, 286.118, 288.737, 288.455, 289.391,
    ];
    let config = LineChartConfig::new(300.0, 300.0)
        .with_labels(AxisMode::Automatic)
        .with_label_source(LabelSource::Tile);
    let engine = engine_with(config, &data);

    let weekdays = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let layout = engine
        .axis_layout(|tile| weekdays[tile].to_owned())
        .expect("layout");
    let texts: Vec<&str> = layout.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, weekdays);
    let indices: Vec<usize> = layout.labels.iter().map(|label| label.sample_index).collect();
    assert_eq!(indices, vec![0, 2, 4, 6, 8]);
}
