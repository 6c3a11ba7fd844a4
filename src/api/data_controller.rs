use tracing::{debug, warn};

use crate::core::Frame;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{LineChartConfig, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Replaces the sample series.
    ///
    /// Samples are positional, so a non-finite value cannot be dropped
    /// without shifting every later sample; the whole update is rejected
    /// instead and the previous series is kept.
    pub fn set_data(&mut self, series: Vec<f64>) -> ChartResult<()> {
        if let Some(position) = series.iter().position(|value| !value.is_finite()) {
            warn!(position, len = series.len(), "rejected non-finite sample");
            return Err(ChartError::InvalidData(format!(
                "sample at index {position} must be finite"
            )));
        }
        debug!(count = series.len(), "set series");
        self.series = series;
        Ok(())
    }

    pub fn clear_data(&mut self) {
        debug!(previous_count = self.series.len(), "clear series");
        self.series.clear();
    }

    /// Resizes the drawing frame, e.g. after a host layout pass.
    pub fn set_frame(&mut self, frame: Frame) -> ChartResult<()> {
        frame.validate()?;
        debug!(
            width = frame.width,
            height = frame.height,
            padding = frame.padding,
            "set frame"
        );
        self.config.frame = frame;
        Ok(())
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        config.validate()?;
        debug!(shape = ?config.shape, filled = config.filled, "set config");
        self.config = config;
        Ok(())
    }
}
