use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PathGeometry, PathMeasure, ScaledPoint};

/// Maximum number of interval halvings per hit-test.
pub const LOCATE_MAX_ITERATIONS: usize = 20;
/// Horizontal distance, in pixels, at which the search stops early.
pub const LOCATE_TOLERANCE_PX: f64 = 0.01;

/// Point on a path under a queried horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitResult {
    pub x: f64,
    pub y: f64,
}

impl HitResult {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<ScaledPoint> for HitResult {
    fn from(point: ScaledPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Finds the point of `path` lying under `query_x`.
///
/// The search bisects the stroke's arc-length progress, which works for
/// curved geometry where `y` is not a closed-form function of `x`. It relies
/// on `x` never decreasing along the stroke, which holds for every path
/// built by [`crate::core::build_path`].
///
/// Clamping: queries at or left of the first point return the first point,
/// queries at or right of the last point return the last point. Paths with
/// fewer than two points and non-finite queries yield [`HitResult::ZERO`].
#[must_use]
pub fn locate(path: &PathGeometry, query_x: f64) -> HitResult {
    let measure = PathMeasure::stroke(path);
    let (Some(start), Some(end)) = (measure.start(), measure.end()) else {
        return HitResult::ZERO;
    };
    if measure.segment_count() == 0 || !query_x.is_finite() {
        return HitResult::ZERO;
    }

    if query_x <= start.x {
        return start.into();
    }
    if query_x >= end.x {
        return end.into();
    }

    let mut low = 0.0_f64;
    let mut high = 1.0_f64;
    let mut best = start;
    for iteration in 0..LOCATE_MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let Some(point) = measure.point_at(mid) else {
            break;
        };
        best = point;
        let delta = point.x - query_x;
        if delta.abs() <= LOCATE_TOLERANCE_PX {
            trace!(iteration, query_x, x = point.x, "locate converged");
            return point.into();
        }
        if delta < 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    trace!(query_x, x = best.x, "locate hit iteration bound");
    best.into()
}
