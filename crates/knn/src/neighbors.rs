//! Neighbor ranking entry point and input validation.

use crate::distance::euclidean_distances;
use crate::error::PredictError;
use crate::point::{PlanePoint, Query};
use crate::result::Neighbor;
use crate::select::rank_neighbors;

/// Validates inputs shared by both prediction variants.
pub(crate) fn validate_inputs<P: PlanePoint>(
    points: &[P],
    query: &Query,
    k: usize,
) -> Result<(), PredictError> {
    if points.is_empty() {
        return Err(PredictError::EmptyDataset);
    }
    if k < 1 || k > points.len() {
        return Err(PredictError::InvalidK {
            k,
            n_points: points.len(),
        });
    }
    if !query.x().is_finite() || !query.y().is_finite() {
        return Err(PredictError::NonFiniteQuery {
            x: query.x(),
            y: query.y(),
        });
    }
    Ok(())
}

/// Returns the `k` points nearest to `query`, nearest first.
///
/// Neighbor order is part of the contract: ascending Euclidean distance,
/// with equal distances resolved in dataset order. Callers rely on it both
/// for the tie-break rule (the first neighbor decides tied votes) and for
/// drawing connecting lines.
///
/// # Errors
///
/// Returns [`PredictError`] if `points` is empty, `k` is outside
/// `1..=points.len()`, or a query coordinate is non-finite.
pub fn nearest_neighbors<P: PlanePoint>(
    points: &[P],
    query: &Query,
    k: usize,
) -> Result<Vec<Neighbor>, PredictError> {
    validate_inputs(points, query, k)?;
    let distances = euclidean_distances(points, query);
    Ok(rank_neighbors(&distances, k))
}
