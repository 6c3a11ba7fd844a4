use crate::core::{DomainRange, Frame, ScaledPoint};
use crate::error::ChartResult;

/// Maps `(index, value)` samples into frame pixels and back.
///
/// Domain space grows upward while pixel space grows downward; the flip
/// happens once here: `y = height - (value - min) * step_height`. The domain
/// minimum therefore lands on the baseline and the maximum on `y = padding`.
///
/// Degenerate inputs (fewer than two samples, flat or missing domain, empty
/// frame) collapse the corresponding step to `0` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    frame: Frame,
    domain: Option<DomainRange>,
    sample_count: usize,
    step_width: f64,
    step_height: f64,
}

impl Scaler {
    pub fn new(frame: Frame, domain: Option<DomainRange>, sample_count: usize) -> ChartResult<Self> {
        frame.validate()?;

        let step_width = if sample_count >= 2 {
            frame.width / (sample_count - 1) as f64
        } else {
            0.0
        };

        let usable_height = frame.usable_height();
        let step_height = match domain {
            Some(range) if !range.is_degenerate() && range.span().is_finite() => {
                if usable_height > 0.0 {
                    usable_height / range.span()
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        Ok(Self {
            frame,
            domain,
            sample_count,
            step_width,
            step_height,
        })
    }

    #[must_use]
    pub fn frame(self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn domain(self) -> Option<DomainRange> {
        self.domain
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn step_width(self) -> f64 {
        self.step_width
    }

    #[must_use]
    pub fn step_height(self) -> f64 {
        self.step_height
    }

    /// Upward distance of `value` above the baseline, in pixels.
    #[must_use]
    pub fn elevation(self, value: f64) -> f64 {
        match self.domain {
            Some(range) if self.step_height != 0.0 => (value - range.min) * self.step_height,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn x_for_index(self, index: usize) -> f64 {
        index as f64 * self.step_width
    }

    #[must_use]
    pub fn y_for_value(self, value: f64) -> f64 {
        self.frame.height - self.elevation(value)
    }

    #[must_use]
    pub fn scale(self, index: usize, value: f64) -> ScaledPoint {
        ScaledPoint::new(self.x_for_index(index), self.y_for_value(value))
    }

    /// Scales a whole series, one point per sample in the same order.
    #[must_use]
    pub fn scale_series(self, series: &[f64]) -> Vec<ScaledPoint> {
        series
            .iter()
            .enumerate()
            .map(|(index, value)| self.scale(index, *value))
            .collect()
    }

    /// Nearest sample index under a horizontal pixel coordinate.
    ///
    /// Returns `None` for an empty series, a non-finite coordinate, or a
    /// coordinate that rounds outside the sample range.
    #[must_use]
    pub fn index_for_x(self, x: f64) -> Option<usize> {
        if self.sample_count == 0 || !x.is_finite() {
            return None;
        }
        if self.step_width == 0.0 {
            return Some(0);
        }

        let slot = (x / self.step_width).round();
        if slot < 0.0 || slot >= self.sample_count as f64 {
            return None;
        }
        Some(slot as usize)
    }

    /// Inverse of [`Scaler::y_for_value`].
    ///
    /// The pixel offset from the baseline is rescaled by the value range
    /// `max - min`. Returns `None` while the vertical step is collapsed.
    #[must_use]
    pub fn value_for_y(self, y: f64) -> Option<f64> {
        let range = self.domain?;
        if self.step_height == 0.0 || !y.is_finite() {
            return None;
        }
        let elevation = self.frame.height - y;
        Some(range.min + elevation * range.span() / self.frame.usable_height())
    }
}
