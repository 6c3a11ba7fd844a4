use ordered_float::OrderedFloat;

use crate::core::DomainRange;

/// Resolves the value range used for vertical scaling.
///
/// When both overrides are given they are used verbatim, even if
/// `override_min > override_max`. Otherwise the range spans the non-NaN
/// samples; `None` means there is nothing to scale.
#[must_use]
pub fn compute_range(
    series: &[f64],
    override_min: Option<f64>,
    override_max: Option<f64>,
) -> Option<DomainRange> {
    if let (Some(min), Some(max)) = (override_min, override_max) {
        return Some(DomainRange::new(min, max));
    }

    let mut values = series
        .iter()
        .copied()
        .filter(|value| !value.is_nan())
        .map(OrderedFloat);
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    Some(DomainRange::new(min.into_inner(), max.into_inner()))
}

/// Convenience wrapper for a range that ignores overrides.
#[must_use]
pub fn series_range(series: &[f64]) -> Option<DomainRange> {
    compute_range(series, None, None)
}
