//! Majority-vote classification.

use crate::error::PredictError;
use crate::neighbors::nearest_neighbors;
use crate::point::{LabeledPoint, Query};
use crate::result::{Classification, VoteTally};

/// Classifies `query` by majority vote among its `k` nearest neighbors.
///
/// The winning label is the one with strictly more votes. On a tied vote the
/// label of the single nearest neighbor wins — ties are not re-scored by
/// distance sums or any other secondary rule.
///
/// # Errors
///
/// Returns [`PredictError`] if `points` is empty, `k` is outside
/// `1..=points.len()`, or a query coordinate is non-finite.
pub fn classify(
    points: &[LabeledPoint],
    query: &Query,
    k: usize,
) -> Result<Classification, PredictError> {
    let neighbors = nearest_neighbors(points, query, k)?;
    let tally = VoteTally::from_labels(neighbors.iter().map(|n| points[n.index()].label()));

    // Tie: the single nearest neighbor decides.
    let label = tally
        .leader()
        .unwrap_or_else(|| points[neighbors[0].index()].label());

    Ok(Classification::new(label, tally, neighbors))
}
