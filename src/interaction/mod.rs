use serde::{Deserialize, Serialize};

use crate::core::{HitResult, ScaledPoint, Scaler};
use crate::error::{ChartError, ChartResult};

/// Caller-owned chart state.
///
/// The engine never stores pointer or reveal state on its own; hosts pass
/// this value in and keep the updated copy that comes back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    /// Pointer x while a touch/hover is active.
    pub touch_x: Option<f64>,
    /// Reveal animation progress in `[0, 1]`.
    pub reveal_progress: f64,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            touch_x: None,
            reveal_progress: 1.0,
        }
    }
}

impl ChartState {
    /// State for a chart that starts hidden and is revealed by the host.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            touch_x: None,
            reveal_progress: 0.0,
        }
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.reveal_progress >= 1.0
    }

    #[must_use]
    pub fn is_touching(self) -> bool {
        self.touch_x.is_some()
    }

    #[must_use]
    pub fn with_touch(mut self, x: f64) -> Self {
        self.touch_x = Some(x);
        self
    }

    #[must_use]
    pub fn without_touch(mut self) -> Self {
        self.touch_x = None;
        self
    }

    pub fn with_reveal_progress(mut self, progress: f64) -> ChartResult<Self> {
        self.reveal_progress = progress;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.reveal_progress.is_finite() || !(0.0..=1.0).contains(&self.reveal_progress) {
            return Err(ChartError::InvalidData(
                "reveal progress must be finite and in [0, 1]".to_owned(),
            ));
        }
        if self.touch_x.is_some_and(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData("touch x must be finite".to_owned()));
        }
        Ok(())
    }
}

/// Sample nearest to a pointer, used for the numeric readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnappedSample {
    pub index: usize,
    pub value: f64,
    pub point: ScaledPoint,
}

/// Everything the interaction layer needs for one pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerReadout {
    /// Indicator position on the drawn line.
    pub hit: HitResult,
    /// Originating sample and its raw value, when the pointer is over the series.
    pub sample: Option<SnappedSample>,
}

/// Snaps a pointer x-coordinate to the nearest sample of `series`.
#[must_use]
pub fn snap_to_sample(series: &[f64], scaler: Scaler, pointer_x: f64) -> Option<SnappedSample> {
    let index = scaler.index_for_x(pointer_x)?;
    let value = *series.get(index)?;
    Some(SnappedSample {
        index,
        value,
        point: scaler.scale(index, value),
    })
}
