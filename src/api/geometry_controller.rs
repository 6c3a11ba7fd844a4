use crate::core::{
    AxisLayout, DomainRange, PathGeometry, PathVariant, ScaledPoint, Scaler, build_path,
    compute_range, layout_axes,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Effective value range: the configured override, else the series range.
    #[must_use]
    pub fn domain(&self) -> Option<DomainRange> {
        let (override_min, override_max) = match self.config.domain_override {
            Some(range) => (Some(range.min), Some(range.max)),
            None => (None, None),
        };
        compute_range(&self.series, override_min, override_max)
    }

    pub fn scaler(&self) -> ChartResult<Scaler> {
        Scaler::new(self.config.frame, self.domain(), self.series.len())
    }

    /// One pixel point per sample, before any `y_offset`.
    pub fn scaled_points(&self) -> ChartResult<Vec<ScaledPoint>> {
        Ok(self.scaler()?.scale_series(&self.series))
    }

    /// Open geometry used to stroke the line.
    pub fn stroke_path(&self) -> ChartResult<PathGeometry> {
        self.build_variant(PathVariant::Open)
    }

    /// Closed area geometry; `None` when fill is disabled.
    pub fn fill_path(&self) -> ChartResult<Option<PathGeometry>> {
        if !self.config.filled {
            return Ok(None);
        }
        self.build_variant(PathVariant::Closed).map(Some)
    }

    fn build_variant(&self, variant: PathVariant) -> ChartResult<PathGeometry> {
        let points = self.scaled_points()?;
        Ok(build_path(
            &points,
            self.config.frame.baseline_y(),
            self.config.path_options(variant),
        ))
    }

    /// Gridlines and sample labels for the current frame.
    ///
    /// `format_label` maps a sample index, or a tile ordinal with
    /// [`crate::core::LabelSource::Tile`], to its label text.
    pub fn axis_layout<F>(&self, format_label: F) -> ChartResult<AxisLayout>
    where
        F: FnMut(usize) -> String,
    {
        Ok(layout_axes(
            self.scaler()?,
            self.config.axis_options(),
            format_label,
        ))
    }
}
