use serde::{Deserialize, Serialize};

use crate::core::{DomainRange, Scaler, find_divisor_counts, tile_sample_index};

/// Minimum frame width before automatic gridlines appear.
pub const GRIDLINE_MIN_FRAME_WIDTH_PX: f64 = 150.0;
/// Target vertical spacing between automatic gridlines.
pub const GRIDLINE_TARGET_SPACING_PX: f64 = 75.0;
/// Minimum frame width before automatic labels appear.
pub const LABEL_MIN_FRAME_WIDTH_PX: f64 = 50.0;
/// Minimum frame height before automatic labels appear.
pub const LABEL_MIN_FRAME_HEIGHT_PX: f64 = 70.0;
/// Target horizontal spacing between automatic labels.
pub const LABEL_TARGET_SPACING_PX: f64 = 65.0;
/// Upper bound on gridlines or label tiles for any mode.
pub const MAX_AXIS_MARKS: usize = 1024;

/// How many gridlines or labels an axis shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    #[default]
    Suppressed,
    Automatic,
    Fixed(usize),
}

/// Value handed to the label formatter for each tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// The sample index under the tile.
    #[default]
    SampleIndex,
    /// The tile ordinal, `0..tile_count`.
    Tile,
}

/// Axis settings consumed by [`layout_axes`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisOptions {
    pub gridlines: AxisMode,
    pub labels: AxisMode,
    pub label_source: LabelSource,
    /// Pixel shift applied to gridline rows, matching the path offset.
    pub y_offset: f64,
}

impl AxisOptions {
    #[must_use]
    pub const fn new(gridlines: AxisMode, labels: AxisMode) -> Self {
        Self {
            gridlines,
            labels,
            label_source: LabelSource::SampleIndex,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_label_source(mut self, label_source: LabelSource) -> Self {
        self.label_source = label_source;
        self
    }

    #[must_use]
    pub const fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }
}

/// Horizontal value gridline with its formatted readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridlinePlacement {
    pub y: f64,
    pub value: f64,
    pub text: String,
}

/// Label anchored under a real sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub x: f64,
    pub sample_index: usize,
    pub text: String,
}

/// Resolved axis decorations for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLayout {
    pub gridlines: Vec<GridlinePlacement>,
    pub labels: Vec<LabelPlacement>,
}

/// Number of horizontal gridlines; `0` means none.
#[must_use]
pub fn resolve_gridline_count(mode: AxisMode, frame_width: f64, frame_height: f64) -> usize {
    match mode {
        AxisMode::Suppressed => 0,
        AxisMode::Fixed(count) => fixed_count(count),
        AxisMode::Automatic => {
            if frame_width <= GRIDLINE_MIN_FRAME_WIDTH_PX || !frame_height.is_finite() {
                return 0;
            }
            let rows = (frame_height / GRIDLINE_TARGET_SPACING_PX)
                .floor()
                .min(MAX_AXIS_MARKS as f64);
            fixed_count((rows as usize).saturating_add(1))
        }
    }
}

/// Number of label tiles; `0` means none.
///
/// Automatic mode takes the largest evenly dividing tile count that does not
/// exceed what the width comfortably fits.
#[must_use]
pub fn resolve_label_tile_count(
    mode: AxisMode,
    sample_count: usize,
    frame_width: f64,
    frame_height: f64,
) -> usize {
    match mode {
        AxisMode::Suppressed => 0,
        AxisMode::Fixed(count) => fixed_count(count),
        AxisMode::Automatic => {
            if frame_height <= LABEL_MIN_FRAME_HEIGHT_PX
                || frame_width <= LABEL_MIN_FRAME_WIDTH_PX
                || !frame_width.is_finite()
            {
                return 0;
            }
            let reasonable = (frame_width / LABEL_TARGET_SPACING_PX + 1.0)
                .ceil()
                .min(MAX_AXIS_MARKS as f64) as usize;
            let count = find_divisor_counts(sample_count)
                .into_iter()
                .find(|candidate| *candidate <= reasonable)
                .unwrap_or(0);
            fixed_count(count)
        }
    }
}

fn fixed_count(count: usize) -> usize {
    if count <= 1 { 0 } else { count.min(MAX_AXIS_MARKS) }
}

/// Values shown beside `count` gridlines, evenly spread from `min` to `max`.
#[must_use]
pub fn gridline_values(domain: DomainRange, count: usize) -> Vec<f64> {
    if count <= 1 {
        return Vec::new();
    }
    let step = domain.span() / (count - 1) as f64;
    (0..count)
        .map(|index| domain.min + index as f64 * step)
        .collect()
}

/// Formats a gridline value, keeping one decimal only when it has a fraction.
#[must_use]
pub fn format_gridline_value(value: f64) -> String {
    if value.fract() != 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

/// Default label text: the formatter input itself.
#[must_use]
pub fn index_label(index: usize) -> String {
    index.to_string()
}

/// Places gridlines and labels for the current scaler.
///
/// `format_label` is called exactly once per tile with the sample index or
/// the tile ordinal, depending on `options.label_source`. Gridline rows are
/// shifted by `options.y_offset` so they line up with the drawn path.
pub fn layout_axes<F>(scaler: Scaler, options: AxisOptions, mut format_label: F) -> AxisLayout
where
    F: FnMut(usize) -> String,
{
    let frame = scaler.frame();
    let sample_count = scaler.sample_count();

    let gridlines = match scaler.domain() {
        Some(domain) if sample_count > 0 => {
            let count = resolve_gridline_count(options.gridlines, frame.width, frame.height);
            gridline_values(domain, count)
                .into_iter()
                .map(|value| GridlinePlacement {
                    y: scaler.y_for_value(value) + options.y_offset,
                    value,
                    text: format_gridline_value(value),
                })
                .collect()
        }
        _ => Vec::new(),
    };

    let tile_count = if sample_count == 0 {
        0
    } else {
        resolve_label_tile_count(options.labels, sample_count, frame.width, frame.height)
    };
    let labels = (0..tile_count)
        .map(|tile| {
            let sample_index = tile_sample_index(tile, tile_count, sample_count);
            let text = match options.label_source {
                LabelSource::SampleIndex => format_label(sample_index),
                LabelSource::Tile => format_label(tile),
            };
            LabelPlacement {
                x: scaler.x_for_index(sample_index),
                sample_index,
                text,
            }
        })
        .collect();

    AxisLayout { gridlines, labels }
}
