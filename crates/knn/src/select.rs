//! Nearest-neighbor ranking.

use std::cmp::Ordering;

use crate::result::Neighbor;

/// Ranks all points by ascending distance and keeps the `k` nearest.
///
/// Uses a full sort on (distance, index) pairs — efficient and cache-friendly
/// at the 9–11 point scale this crate targets. Ties are broken by original
/// dataset index, so equal-distance points keep their dataset order in the
/// output.
///
/// # Panics
///
/// Debug-asserts that `k >= 1` and `k <= distances.len()`.
pub(crate) fn rank_neighbors(distances: &[f64], k: usize) -> Vec<Neighbor> {
    debug_assert!(k >= 1);
    debug_assert!(k <= distances.len());

    let mut pairs: Vec<(f64, usize)> = distances
        .iter()
        .copied()
        .enumerate()
        .map(|(i, d)| (d, i))
        .collect();

    // NaN-safe compare; the index tiebreak makes the order total.
    pairs.sort_unstable_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });
    pairs.truncate(k);

    pairs.into_iter().map(|(d, i)| Neighbor::new(i, d)).collect()
}
