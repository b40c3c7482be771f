//! Synthetic scatterplot dataset generation.

use rand::Rng;

use pinpoint_knn::{Label, LabeledPoint, PlanePoint, ValuedPoint};

use crate::config::DatasetConfig;
use crate::error::DatasetError;

/// Draws the dataset size uniformly from the configured range.
fn draw_size(config: &DatasetConfig, rng: &mut impl Rng) -> usize {
    rng.random_range(config.min_points()..=config.max_points())
}

/// Generates a labeled dataset for the classification variant.
///
/// Coordinates are uniform in `[0, 1)`. Labels alternate `A, B, A, ...` by
/// index; should one class ever lead by more than one vote, the last point
/// is flipped to the minority class. Class counts therefore differ by at
/// most 1.
///
/// # Errors
///
/// Returns [`DatasetError`] if the configuration is invalid.
pub fn generate_labeled(
    config: &DatasetConfig,
    rng: &mut impl Rng,
) -> Result<Vec<LabeledPoint>, DatasetError> {
    config.validate()?;

    let n = draw_size(config, rng);
    let mut counts = [0usize; 2];
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let label = Label::from_index(i);
        counts[label.as_index()] += 1;
        points.push(LabeledPoint::new(rng.random(), rng.random(), label));
    }

    // Rebalance: points are immutable, so the last one is rebuilt in place.
    if counts[0].abs_diff(counts[1]) > 1 {
        if let Some(last) = points.pop() {
            let minority = if counts[0] > counts[1] {
                Label::B
            } else {
                Label::A
            };
            points.push(LabeledPoint::new(last.x(), last.y(), minority));
        }
    }

    Ok(points)
}

/// Generates a valued dataset for the regression variant.
///
/// Coordinates are uniform in `[0, 1)`; values are uniform integers in
/// `0..=value_max`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the configuration is invalid.
pub fn generate_valued(
    config: &DatasetConfig,
    rng: &mut impl Rng,
) -> Result<Vec<ValuedPoint>, DatasetError> {
    config.validate()?;

    let n = draw_size(config, rng);
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        let value = rng.random_range(0..=config.value_max());
        points.push(ValuedPoint::new(x, y, value));
    }

    Ok(points)
}
