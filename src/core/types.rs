use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing area in pixel/layout units.
///
/// `padding` is the vertical inset kept free above the highest sample; the
/// lowest sample always sits on the bottom edge (`y = height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: f64,
}

impl Frame {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Rejects negative or non-finite dimensions.
    ///
    /// Zero-sized frames are valid and produce collapsed geometry.
    pub fn validate(self) -> ChartResult<()> {
        let dims = [self.width, self.height, self.padding];
        if dims.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ChartError::InvalidFrame {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }

    /// Vertical span available to the value range.
    #[must_use]
    pub fn usable_height(self) -> f64 {
        (self.height - self.padding).max(0.0)
    }

    /// Bottom edge used to close area fills.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height
    }
}

/// Pixel-space point. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

impl ScaledPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Value-space range used for vertical scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub min: f64,
    pub max: f64,
}

impl DomainRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when every value maps onto a single pixel row.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
