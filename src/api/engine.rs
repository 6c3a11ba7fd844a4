use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::LineChartConfig;

/// Main orchestration facade consumed by host applications.
///
/// `LineChartEngine` owns the configuration, the current sample series and the
/// renderer. Geometry is recomputed from those inputs on every query, so
/// a hit-test always runs against the current series and frame. Pointer and
/// reveal state stay with the caller as a [`crate::interaction::ChartState`].
pub struct LineChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) series: Vec<f64>,
}

impl<R: Renderer> LineChartEngine<R> {
    /// Creates an engine with an empty series.
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.frame.width,
            height = config.frame.height,
            padding = config.frame.padding,
            "line chart engine initialized"
        );
        Ok(Self {
            renderer,
            config,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> LineChartConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
