use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::curve::Segment;
use crate::core::{DomainRange, Frame, ScaledPoint, Scaler, compute_range};
use crate::error::ChartResult;

/// Path primitive in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ScaledPoint),
    LineTo(ScaledPoint),
    QuadTo {
        control: ScaledPoint,
        to: ScaledPoint,
    },
    /// Closes the current sub-path back to its `MoveTo`.
    Close,
}

/// How consecutive samples are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShape {
    Straight,
    #[default]
    Curved,
}

/// Stroke-only outline or area fill closed against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathVariant {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathOptions {
    pub shape: LineShape,
    pub variant: PathVariant,
    /// Uniform pixel shift added to every sample's `y` before construction.
    #[serde(default)]
    pub y_offset: f64,
}

impl PathOptions {
    #[must_use]
    pub const fn new(shape: LineShape, variant: PathVariant) -> Self {
        Self {
            shape,
            variant,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }
}

/// Derived, stateless path geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    variant: PathVariant,
    commands: Vec<PathCommand>,
}

impl PathGeometry {
    #[must_use]
    pub fn empty(variant: PathVariant) -> Self {
        Self {
            variant,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_commands(variant: PathVariant, commands: Vec<PathCommand>) -> Self {
        Self { variant, commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn variant(&self) -> PathVariant {
        self.variant
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.variant == PathVariant::Closed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawable line/curve segments. `MoveTo` and `Close` do not count.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::LineTo(_) | PathCommand::QuadTo { .. }))
            .count()
    }

    #[must_use]
    pub fn first_point(&self) -> Option<ScaledPoint> {
        self.commands.iter().find_map(|command| match command {
            PathCommand::MoveTo(point) => Some(*point),
            _ => None,
        })
    }

    /// Last explicit point, ignoring the implicit `Close` leg.
    #[must_use]
    pub fn last_point(&self) -> Option<ScaledPoint> {
        self.commands.iter().rev().find_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::QuadTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        })
    }

    /// All drawable segments, resolved with their start points.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.commands.len());
        let mut current = ScaledPoint::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => current = point,
                PathCommand::LineTo(to) => {
                    segments.push(Segment::Line { from: current, to });
                    current = to;
                }
                PathCommand::QuadTo { control, to } => {
                    segments.push(Segment::Quad {
                        from: current,
                        control,
                        to,
                    });
                    current = to;
                }
                PathCommand::Close => {}
            }
        }
        segments
    }

    /// Segments tracing the data line only.
    ///
    /// For closed geometry the two baseline legs are dropped, so x never
    /// decreases along the returned segments.
    #[must_use]
    pub fn stroke_segments(&self) -> Vec<Segment> {
        let mut segments = self.segments();
        if self.is_closed() && segments.len() >= 2 {
            segments.pop();
            segments.remove(0);
        }
        segments
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
            PathCommand::QuadTo { control, to } => control.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        })
    }
}

/// Builds path geometry through already scaled points.
///
/// - 0 points: empty geometry.
/// - 1 point: a lone `MoveTo`, nothing drawable.
/// - Straight: one `LineTo` per consecutive pair.
/// - Curved: two quadratic pieces per pair meeting at the pair's midpoint.
///   Each control point sits at its sample's height, halfway between the
///   sample and the midpoint, so the curve passes through every sample with
///   a horizontal tangent and joins smoothly at the midpoints.
/// - Closed: starts on the baseline under the first sample, follows the
///   open body, drops to the baseline under the last sample and closes.
#[must_use]
pub fn build_path(points: &[ScaledPoint], baseline_y: f64, options: PathOptions) -> PathGeometry {
    let shifted: Vec<ScaledPoint> = points
        .iter()
        .map(|point| ScaledPoint::new(point.x, point.y + options.y_offset))
        .collect();

    let Some((&first, rest)) = shifted.split_first() else {
        return PathGeometry::empty(options.variant);
    };
    if rest.is_empty() {
        return PathGeometry::from_commands(options.variant, vec![PathCommand::MoveTo(first)]);
    }

    let body_len = match options.shape {
        LineShape::Straight => shifted.len(),
        LineShape::Curved => shifted.len() * 2,
    };
    let mut commands = Vec::with_capacity(body_len + 3);

    match options.variant {
        PathVariant::Open => commands.push(PathCommand::MoveTo(first)),
        PathVariant::Closed => {
            commands.push(PathCommand::MoveTo(ScaledPoint::new(first.x, baseline_y)));
            commands.push(PathCommand::LineTo(first));
        }
    }

    match options.shape {
        LineShape::Straight => push_straight_body(&mut commands, &shifted),
        LineShape::Curved => push_curved_body(&mut commands, &shifted),
    }

    if options.variant == PathVariant::Closed {
        let last = shifted[shifted.len() - 1];
        commands.push(PathCommand::LineTo(ScaledPoint::new(last.x, baseline_y)));
        commands.push(PathCommand::Close);
    }

    PathGeometry::from_commands(options.variant, commands)
}

fn push_straight_body(commands: &mut Vec<PathCommand>, points: &[ScaledPoint]) {
    commands.extend(points.iter().skip(1).map(|point| PathCommand::LineTo(*point)));
}

fn push_curved_body(commands: &mut Vec<PathCommand>, points: &[ScaledPoint]) {
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mid = from.midpoint(to);
        commands.push(PathCommand::QuadTo {
            control: ScaledPoint::new((from.x + mid.x) / 2.0, from.y),
            to: mid,
        });
        commands.push(PathCommand::QuadTo {
            control: ScaledPoint::new((mid.x + to.x) / 2.0, to.y),
            to,
        });
    }
}

/// Scales a series into `frame` and builds its path in one step.
pub fn build_series_path(
    series: &[f64],
    frame: Frame,
    domain_override: Option<DomainRange>,
    options: PathOptions,
) -> ChartResult<PathGeometry> {
    let domain = match domain_override {
        Some(range) => Some(range),
        None => compute_range(series, None, None),
    };
    let scaler = Scaler::new(frame, domain, series.len())?;
    let points = scaler.scale_series(series);
    Ok(build_path(&points, frame.baseline_y(), options))
}

/// Builds one path per independent series, each scaled to its own range.
///
/// Sharing `options.y_offset` keeps the series on a common baseline.
pub fn build_paths_for_series(
    batch: &[Vec<f64>],
    frame: Frame,
    options: PathOptions,
) -> ChartResult<Vec<PathGeometry>> {
    frame.validate()?;

    // Every series gets its own scaler and buffers, so the parallel path
    // shares nothing but the read-only inputs.
    #[cfg(feature = "parallel-projection")]
    {
        batch
            .par_iter()
            .map(|series| build_series_path(series, frame, None, options))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        batch
            .iter()
            .map(|series| build_series_path(series, frame, None, options))
            .collect()
    }
}
