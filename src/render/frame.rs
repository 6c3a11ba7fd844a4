use crate::core::{Frame, GridlinePlacement, HitResult, LabelPlacement, PathGeometry};
use crate::error::{ChartError, ChartResult};

/// Backend-agnostic scene for one chart draw pass.
///
/// Only geometry lives here; stroke widths, colors and fonts belong to the
/// backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub frame: Frame,
    pub stroke: PathGeometry,
    pub fill: Option<PathGeometry>,
    pub gridlines: Vec<GridlinePlacement>,
    pub labels: Vec<LabelPlacement>,
    pub indicator: Option<HitResult>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(frame: Frame, stroke: PathGeometry) -> Self {
        Self {
            frame,
            stroke,
            fill: None,
            gridlines: Vec::new(),
            labels: Vec::new(),
            indicator: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: PathGeometry) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: HitResult) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.frame.validate()?;

        if !self.stroke.is_finite() {
            return Err(ChartError::InvalidData(
                "stroke path coordinates must be finite".to_owned(),
            ));
        }
        if let Some(fill) = &self.fill {
            if !fill.is_finite() {
                return Err(ChartError::InvalidData(
                    "fill path coordinates must be finite".to_owned(),
                ));
            }
        }
        if self
            .gridlines
            .iter()
            .any(|gridline| !gridline.y.is_finite() || !gridline.value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "gridline placement must be finite".to_owned(),
            ));
        }
        if self.labels.iter().any(|label| !label.x.is_finite()) {
            return Err(ChartError::InvalidData(
                "label placement must be finite".to_owned(),
            ));
        }
        if let Some(indicator) = self.indicator {
            if !indicator.x.is_finite() || !indicator.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "indicator position must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stroke.is_empty()
            && self.fill.as_ref().is_none_or(PathGeometry::is_empty)
            && self.gridlines.is_empty()
            && self.labels.is_empty()
    }
}
