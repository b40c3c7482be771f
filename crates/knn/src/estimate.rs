//! Averaged-value regression.

use crate::error::PredictError;
use crate::neighbors::nearest_neighbors;
use crate::point::{Query, ValuedPoint};
use crate::result::Estimate;

/// Estimates a value for `query` by averaging its `k` nearest neighbors.
///
/// The average is rounded half away from zero to an integer (`f64::round`
/// semantics), so two equidistant neighbors valued 10 and 90 estimate to 50.
///
/// # Errors
///
/// Returns [`PredictError`] if `points` is empty, `k` is outside
/// `1..=points.len()`, or a query coordinate is non-finite.
pub fn estimate(
    points: &[ValuedPoint],
    query: &Query,
    k: usize,
) -> Result<Estimate, PredictError> {
    let neighbors = nearest_neighbors(points, query, k)?;

    let sum: u64 = neighbors
        .iter()
        .map(|n| u64::from(points[n.index()].value()))
        .sum();
    let value = (sum as f64 / neighbors.len() as f64).round() as u32;

    Ok(Estimate::new(value, neighbors))
}
