use crate::core::curve::{LengthTable, Segment};
use crate::core::{PathCommand, PathGeometry, PathVariant, ScaledPoint};

struct MeasuredSegment {
    segment: Segment,
    /// Path length before this segment starts.
    offset: f64,
    lengths: LengthTable,
}

impl MeasuredSegment {
    fn length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Curve parameter reached after `distance` along this segment.
    fn parameter_at(&self, distance: f64) -> f64 {
        let total = self.length();
        if total <= 0.0 {
            return 0.0;
        }
        let distance = distance.clamp(0.0, total);
        let steps = self.lengths.len() - 1;
        let upper = self
            .lengths
            .partition_point(|length| *length < distance)
            .clamp(1, steps);
        let lower_len = self.lengths[upper - 1];
        let piece = self.lengths[upper] - lower_len;
        let within = if piece > 0.0 {
            (distance - lower_len) / piece
        } else {
            0.0
        };
        ((upper - 1) as f64 + within) / steps as f64
    }
}

/// Arc-length parameterization of a path.
///
/// Progress `0.0` is the first point and `1.0` the last; equal progress
/// increments cover equal geometric distance.
pub struct PathMeasure {
    start: Option<ScaledPoint>,
    segments: Vec<MeasuredSegment>,
    total_length: f64,
}

impl PathMeasure {
    #[must_use]
    pub fn from_segments(start: Option<ScaledPoint>, segments: Vec<Segment>) -> Self {
        let mut offset = 0.0;
        let mut measured = Vec::with_capacity(segments.len());
        for segment in segments {
            let lengths = segment.flattened_lengths();
            let entry = MeasuredSegment {
                segment,
                offset,
                lengths,
            };
            offset += entry.length();
            measured.push(entry);
        }

        Self {
            start: measured.first().map(|entry| entry.segment.start()).or(start),
            segments: measured,
            total_length: offset,
        }
    }

    /// Measures only the data line (baseline legs of area fills excluded).
    #[must_use]
    pub fn stroke(path: &PathGeometry) -> Self {
        Self::from_segments(path.first_point(), path.stroke_segments())
    }

    /// Measures every drawable segment in command order.
    #[must_use]
    pub fn outline(path: &PathGeometry) -> Self {
        Self::from_segments(path.first_point(), path.segments())
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn start(&self) -> Option<ScaledPoint> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<ScaledPoint> {
        self.segments
            .last()
            .map(|entry| entry.segment.end())
            .or(self.start)
    }

    /// Index of the segment covering `distance` and the curve parameter in it.
    fn locate_distance(&self, distance: f64) -> Option<(usize, f64)> {
        if self.segments.is_empty() {
            return None;
        }
        let index = self
            .segments
            .partition_point(|entry| entry.offset + entry.length() < distance)
            .min(self.segments.len() - 1);
        let entry = &self.segments[index];
        Some((index, entry.parameter_at(distance - entry.offset)))
    }

    /// Point reached after `progress` of the total length.
    #[must_use]
    pub fn point_at(&self, progress: f64) -> Option<ScaledPoint> {
        let progress = progress.clamp(0.0, 1.0);
        match self.locate_distance(progress * self.total_length) {
            Some((index, t)) => Some(self.segments[index].segment.eval(t)),
            None => self.start,
        }
    }

    /// Leading part of the measured path covering `progress` of its length.
    #[must_use]
    pub fn trimmed(&self, progress: f64) -> Vec<Segment> {
        let progress = progress.clamp(0.0, 1.0);
        let Some((index, t)) = self.locate_distance(progress * self.total_length) else {
            return Vec::new();
        };
        let mut kept: Vec<Segment> = self.segments[..index]
            .iter()
            .map(|entry| entry.segment)
            .collect();
        if t > 0.0 {
            kept.push(self.segments[index].segment.head(t));
        }
        kept
    }
}

/// Trims a path to the first `progress` share of its outline length.
///
/// Used for reveal animations driven by a caller-owned progress value.
/// `progress >= 1.0` returns the path unchanged; lower values return an open
/// path ending part-way along the outline.
#[must_use]
pub fn trim_path(path: &PathGeometry, progress: f64) -> PathGeometry {
    if progress >= 1.0 || path.is_empty() {
        return path.clone();
    }

    let measure = PathMeasure::outline(path);
    let Some(start) = measure.start() else {
        return PathGeometry::empty(PathVariant::Open);
    };

    let mut commands = vec![PathCommand::MoveTo(start)];
    for segment in measure.trimmed(progress) {
        commands.push(match segment {
            Segment::Line { to, .. } => PathCommand::LineTo(to),
            Segment::Quad { control, to, .. } => PathCommand::QuadTo { control, to },
        });
    }
    PathGeometry::from_commands(PathVariant::Open, commands)
}
