use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is plugged in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stroke_segment_count: usize,
    pub last_fill_segment_count: usize,
    pub last_gridline_count: usize,
    pub last_label_count: usize,
    pub last_indicator_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_stroke_segment_count = frame.stroke.segment_count();
        self.last_fill_segment_count = frame
            .fill
            .as_ref()
            .map_or(0, |fill| fill.segment_count());
        self.last_gridline_count = frame.gridlines.len();
        self.last_label_count = frame.labels.len();
        self.last_indicator_visible = frame.indicator.is_some();
        Ok(())
    }
}
