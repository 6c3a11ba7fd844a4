/// Returns every tile count that spreads equally spaced tiles over `n`
/// samples with both endpoints included.
///
/// The result starts with `n` itself and continues in strictly descending
/// order with each `k >= 3` where `(n - 1)` is divisible by `(k - 1)`.
/// The endpoints-only layout (`k = 2`) is never offered.
///
/// ```
/// use line_chart_rs::core::find_divisor_counts;
///
/// assert_eq!(find_divisor_counts(9), vec![9, 5, 3]);
/// assert_eq!(find_divisor_counts(1), vec![1]);
/// ```
#[must_use]
pub fn find_divisor_counts(n: usize) -> Vec<usize> {
    let mut counts = vec![n];
    let span = n.saturating_sub(1);
    // (k - 1) is a proper divisor of (n - 1), so k never exceeds ceil(n / 2).
    let largest_candidate = n.div_ceil(2);
    for curr in (3..=largest_candidate).rev() {
        if curr < n && span % (curr - 1) == 0 {
            counts.push(curr);
        }
    }
    counts
}

/// Maps tile `tile` of `tile_count` onto a real sample index.
///
/// Uses integer division so tiles never land between samples. Tile counts
/// below 2 have no stride and map everything to index 0.
#[must_use]
pub fn tile_sample_index(tile: usize, tile_count: usize, sample_count: usize) -> usize {
    if tile_count < 2 {
        return 0;
    }
    let stride = sample_count.saturating_sub(1) / (tile_count - 1);
    tile * stride
}
