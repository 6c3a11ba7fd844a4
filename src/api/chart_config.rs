use serde::{Deserialize, Serialize};

use crate::core::{
    AxisMode, AxisOptions, DomainRange, Frame, LabelSource, LineShape, PathOptions, PathVariant,
};
use crate::error::{ChartError, ChartResult};

/// Vertical inset above the highest sample used by [`LineChartConfig::new`].
pub const DEFAULT_PADDING_PX: f64 = 30.0;

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub frame: Frame,
    #[serde(default)]
    pub shape: LineShape,
    /// Emit a closed area under the line in addition to the stroke.
    #[serde(default = "default_filled")]
    pub filled: bool,
    #[serde(default)]
    pub y_offset: f64,
    /// Fixed value range replacing the one derived from the samples.
    #[serde(default)]
    pub domain_override: Option<DomainRange>,
    #[serde(default)]
    pub gridlines: AxisMode,
    #[serde(default)]
    pub labels: AxisMode,
    /// Whether label text is formatted from sample indices or tile ordinals.
    #[serde(default)]
    pub label_source: LabelSource,
}

impl LineChartConfig {
    /// Creates a curved, filled chart config with the default top padding.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_frame(Frame::new(width, height, DEFAULT_PADDING_PX))
    }

    #[must_use]
    pub fn with_frame(frame: Frame) -> Self {
        Self {
            frame,
            shape: LineShape::default(),
            filled: default_filled(),
            y_offset: 0.0,
            domain_override: None,
            gridlines: AxisMode::Suppressed,
            labels: AxisMode::Suppressed,
            label_source: LabelSource::SampleIndex,
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: LineShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[must_use]
    pub fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Pins the value range; `min` and `max` are used verbatim.
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain_override = Some(DomainRange::new(min, max));
        self
    }

    #[must_use]
    pub fn with_gridlines(mut self, mode: AxisMode) -> Self {
        self.gridlines = mode;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, mode: AxisMode) -> Self {
        self.labels = mode;
        self
    }

    #[must_use]
    pub fn with_label_source(mut self, label_source: LabelSource) -> Self {
        self.label_source = label_source;
        self
    }

    /// Path options for the stroke (open) or fill (closed) geometry.
    #[must_use]
    pub fn path_options(self, variant: PathVariant) -> PathOptions {
        PathOptions::new(self.shape, variant).with_y_offset(self.y_offset)
    }

    #[must_use]
    pub fn axis_options(self) -> AxisOptions {
        AxisOptions::new(self.gridlines, self.labels)
            .with_label_source(self.label_source)
            .with_y_offset(self.y_offset)
    }

    pub fn validate(self) -> ChartResult<()> {
        self.frame.validate()?;
        if !self.y_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "y offset must be finite".to_owned(),
            ));
        }
        if let Some(range) = self.domain_override {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ChartError::InvalidData(
                    "domain override bounds must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

fn default_filled() -> bool {
    true
}
