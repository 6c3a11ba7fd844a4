use line_chart_rs::api::{LineChartConfig, LineChartEngine};
use line_chart_rs::core::{
    AxisMode, Frame, HitResult, LineShape, PathCommand, PathGeometry, PathVariant, ScaledPoint,
    index_label,
};
use line_chart_rs::interaction::ChartState;
use line_chart_rs::render::{NullRenderer, RenderFrame};

fn engine() -> LineChartEngine<NullRenderer> {
    let config = LineChartConfig::with_frame(Frame::new(300.0, 200.0, 20.0))
        .with_shape(LineShape::Straight)
        .with_gridlines(AxisMode::Fixed(3))
        .with_labels(AxisMode::Fixed(3));
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![3.0, 7.0, 2.0, 9.0, 4.0])
        .expect("set data");
    engine
}

#[test]
fn revealed_state_renders_stroke_fill_and_axes() {
    let mut engine = engine();
    engine
        .render(ChartState::default(), index_label)
        .expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_stroke_segment_count, 4);
    assert_eq!(renderer.last_fill_segment_count, 6);
    assert_eq!(renderer.last_gridline_count, 3);
    assert_eq!(renderer.last_label_count, 3);
    assert!(!renderer.last_indicator_visible);
}

#[test]
fn fill_stays_hidden_until_reveal_completes() {
    let engine = engine();
    let state = ChartState::hidden()
        .with_reveal_progress(0.5)
        .expect("progress");

    let frame = engine.build_render_frame(state, index_label).expect("frame");
    assert!(frame.fill.is_none());
    assert!(!frame.stroke.is_closed());
    assert!(frame.stroke.segment_count() < 4);
    assert!(frame.stroke.segment_count() >= 1);

    let hidden = engine
        .build_render_frame(ChartState::hidden(), index_label)
        .expect("frame");
    assert_eq!(hidden.stroke.segment_count(), 0);
    assert!(hidden.fill.is_none());
}

#[test]
fn indicator_tracks_touch_on_the_full_line() {
    let engine = engine();
    let state = ChartState::hidden()
        .with_reveal_progress(0.1)
        .expect("progress")
        .with_touch(225.0);

    let frame = engine.build_render_frame(state, index_label).expect("frame");
    let indicator = frame.indicator.expect("indicator");
    // Sample 3 (the maximum) sits at x=225, on the padding line.
    assert!((indicator.x - 225.0).abs() <= 0.02);
    assert!((indicator.y - 20.0).abs() <= 0.1);
}

#[test]
fn render_rejects_invalid_state() {
    let mut engine = engine();
    let mut state = ChartState::default();
    state.reveal_progress = f64::NAN;
    assert!(engine.render(state, index_label).is_err());
    assert!(ChartState::default().with_reveal_progress(1.5).is_err());
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn render_frame_validation_catches_non_finite_geometry() {
    let frame = Frame::new(100.0, 100.0, 0.0);
    let stroke = PathGeometry::from_commands(
        PathVariant::Open,
        vec![
            PathCommand::MoveTo(ScaledPoint::new(0.0, 0.0)),
            PathCommand::LineTo(ScaledPoint::new(f64::NAN, 10.0)),
        ],
    );
    assert!(RenderFrame::new(frame, stroke).validate().is_err());

    let ok = RenderFrame::new(frame, PathGeometry::empty(PathVariant::Open));
    assert!(ok.validate().is_ok());
    assert!(ok.is_empty());

    let bad_indicator = ok.with_indicator(HitResult {
        x: f64::INFINITY,
        y: 0.0,
    });
    assert!(bad_indicator.validate().is_err());
}

#[test]
fn empty_series_renders_an_empty_frame() {
    let config = LineChartConfig::new(100.0, 100.0);
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let frame = engine
        .build_render_frame(ChartState::default(), index_label)
        .expect("frame");
    assert!(frame.is_empty());

    engine
        .render(ChartState::default(), index_label)
        .expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_stroke_segment_count, 0);
}
