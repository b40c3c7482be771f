//! Euclidean distance computation from a query to every dataset point.

use crate::point::{PlanePoint, Query};

/// Computes Euclidean distances from `query` to every point, in dataset order.
pub(crate) fn euclidean_distances<P: PlanePoint>(points: &[P], query: &Query) -> Vec<f64> {
    points
        .iter()
        .map(|p| {
            let dx = p.x() - query.x();
            let dy = p.y() - query.y();
            (dx * dx + dy * dy).sqrt()
        })
        .collect()
}
