pub mod axis;
pub mod curve;
pub mod locator;
pub mod measure;
pub mod path;
pub mod scale;
pub mod stats;
pub mod tile_divisor;
pub mod types;

pub use axis::{
    AxisLayout, AxisMode, AxisOptions, GridlinePlacement, LabelPlacement, LabelSource,
    MAX_AXIS_MARKS, format_gridline_value, gridline_values, index_label, layout_axes,
    resolve_gridline_count, resolve_label_tile_count,
};
pub use curve::Segment;
pub use locator::{HitResult, locate};
pub use measure::{PathMeasure, trim_path};
pub use path::{
    LineShape, PathCommand, PathGeometry, PathOptions, PathVariant, build_path,
    build_paths_for_series, build_series_path,
};
pub use scale::Scaler;
pub use stats::{compute_range, series_range};
pub use tile_divisor::{find_divisor_counts, tile_sample_index};
pub use types::{DomainRange, Frame, ScaledPoint};
