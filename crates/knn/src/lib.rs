//! K-nearest-neighbor prediction over 2-D scatterplot points.
//!
//! This crate provides the computation core of an interactive KNN demo:
//! rank the points nearest a query location, then aggregate them in one of
//! two modes:
//!
//! | Mode | Aggregation | Output |
//! |------|-------------|--------|
//! | Classification | Majority vote, nearest neighbor breaks ties | [`Classification`] |
//! | Regression | Rounded average of neighbor values | [`Estimate`] |
//!
//! # Quick start
//!
//! ```
//! use pinpoint_knn::{Label, LabeledPoint, Query, classify};
//!
//! let points = vec![
//!     LabeledPoint::new(0.2, 0.2, Label::A),
//!     LabeledPoint::new(0.3, 0.25, Label::A),
//!     LabeledPoint::new(0.8, 0.8, Label::B),
//! ];
//!
//! let result = classify(&points, &Query::new(0.25, 0.22), 3).unwrap();
//! assert_eq!(result.label(), Label::A);
//! assert_eq!(result.confidence(), (2, 3));
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify() / estimate()
//!   ├─ validate_inputs()        (neighbors.rs)
//!   ├─ euclidean_distances()    (distance.rs)
//!   ├─ rank_neighbors()         (select.rs)
//!   └─ vote / average           (classify.rs, estimate.rs)
//! ```
//!
//! Both entry points are pure functions: identical inputs always produce
//! identical outputs, and callers own any state the results are stored in.

pub mod classify;
pub mod error;
pub mod estimate;
pub mod neighbors;
pub mod point;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;

pub use classify::classify;
pub use error::PredictError;
pub use estimate::estimate;
pub use neighbors::nearest_neighbors;
pub use point::{Label, LabeledPoint, PlanePoint, Query, ValuedPoint};
pub use result::{Classification, Estimate, Neighbor, VoteTally};

/// Suggests an odd k near `sqrt(n_points)`.
///
/// An odd k cannot produce a tied binary vote, which keeps the tie-break
/// rule out of play for typical interactive use. Returns at least 1.
pub fn suggested_k(n_points: usize) -> usize {
    let k = (n_points as f64).sqrt().round().max(1.0) as usize;
    if k % 2 == 0 { k - 1 } else { k }
}
