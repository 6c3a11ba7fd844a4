//! Drawable path segments: straight lines and quadratic Bezier pieces.

use smallvec::{SmallVec, smallvec};

use crate::core::ScaledPoint;

/// Number of straight pieces used to approximate a quadratic's length.
pub const QUAD_FLATTEN_STEPS: usize = 16;

/// Cumulative flattened lengths of one segment; fits a quad without spilling.
pub type LengthTable = SmallVec<[f64; QUAD_FLATTEN_STEPS + 1]>;

/// One drawable piece of a path, resolved with its start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        from: ScaledPoint,
        to: ScaledPoint,
    },
    Quad {
        from: ScaledPoint,
        control: ScaledPoint,
        to: ScaledPoint,
    },
}

impl Segment {
    #[must_use]
    pub fn start(self) -> ScaledPoint {
        match self {
            Self::Line { from, .. } | Self::Quad { from, .. } => from,
        }
    }

    #[must_use]
    pub fn end(self) -> ScaledPoint {
        match self {
            Self::Line { to, .. } | Self::Quad { to, .. } => to,
        }
    }

    /// Evaluates the segment at curve parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn eval(self, t: f64) -> ScaledPoint {
        match self {
            Self::Line { from, to } => from.lerp(to, t),
            Self::Quad { from, control, to } => {
                let mt = 1.0 - t;
                let a = mt * mt;
                let b = 2.0 * mt * t;
                let c = t * t;
                ScaledPoint::new(
                    from.x * a + control.x * b + to.x * c,
                    from.y * a + control.y * b + to.y * c,
                )
            }
        }
    }

    /// Splits at parameter `t` (de Casteljau), returning the leading piece.
    #[must_use]
    pub fn head(self, t: f64) -> Self {
        match self {
            Self::Line { from, to } => Self::Line {
                from,
                to: from.lerp(to, t),
            },
            Self::Quad { from, control, to } => {
                let p01 = from.lerp(control, t);
                let p12 = control.lerp(to, t);
                Self::Quad {
                    from,
                    control: p01,
                    to: p01.lerp(p12, t),
                }
            }
        }
    }

    /// Cumulative lengths at each flattening step, starting with `0.0`.
    ///
    /// Lines have two entries, quads `QUAD_FLATTEN_STEPS + 1`.
    #[must_use]
    pub fn flattened_lengths(self) -> LengthTable {
        match self {
            Self::Line { from, to } => smallvec![0.0, from.distance(to)],
            Self::Quad { from, .. } => {
                let mut lengths = LengthTable::new();
                lengths.push(0.0);
                let mut prev = from;
                let mut total = 0.0;
                for step in 1..=QUAD_FLATTEN_STEPS {
                    let point = self.eval(step as f64 / QUAD_FLATTEN_STEPS as f64);
                    total += prev.distance(point);
                    lengths.push(total);
                    prev = point;
                }
                lengths
            }
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.flattened_lengths().last().copied().unwrap_or(0.0)
    }
}
