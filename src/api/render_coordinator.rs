use tracing::trace;

use crate::core::{locate, trim_path};
use crate::error::ChartResult;
use crate::interaction::ChartState;
use crate::render::{RenderFrame, Renderer};

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Materializes the scene for one draw pass.
    ///
    /// The stroke is trimmed to `state.reveal_progress`; the fill only shows
    /// once the line is fully revealed. The indicator follows `state.touch_x`
    /// on the untrimmed stroke.
    pub fn build_render_frame<F>(&self, state: ChartState, format_label: F) -> ChartResult<RenderFrame>
    where
        F: FnMut(usize) -> String,
    {
        state.validate()?;
        let stroke = self.stroke_path()?;
        let indicator = state.touch_x.map(|x| locate(&stroke, x));

        let mut frame = RenderFrame::new(self.config.frame, trim_path(&stroke, state.reveal_progress));
        if state.is_revealed() {
            if let Some(fill) = self.fill_path()? {
                frame = frame.with_fill(fill);
            }
        }
        if let Some(hit) = indicator {
            frame = frame.with_indicator(hit);
        }

        let axes = self.axis_layout(format_label)?;
        frame.gridlines = axes.gridlines;
        frame.labels = axes.labels;
        Ok(frame)
    }

    /// Builds the current scene and hands it to the renderer.
    pub fn render<F>(&mut self, state: ChartState, format_label: F) -> ChartResult<()>
    where
        F: FnMut(usize) -> String,
    {
        let frame = self.build_render_frame(state, format_label)?;
        trace!(
            stroke_segments = frame.stroke.segment_count(),
            gridlines = frame.gridlines.len(),
            labels = frame.labels.len(),
            "render line chart"
        );
        self.renderer.render(&frame)
    }
}
