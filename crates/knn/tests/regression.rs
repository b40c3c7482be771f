//! Integration tests for averaged-value regression.

use pinpoint_knn::{Query, ValuedPoint, estimate};

/// Worked example: equidistant values 10 and 90 average to 50.
#[test]
fn equidistant_pair() {
    let points = vec![
        ValuedPoint::new(0.3, 0.5, 10),
        ValuedPoint::new(0.7, 0.5, 90),
    ];
    let result = estimate(&points, &Query::new(0.5, 0.5), 2).unwrap();
    assert_eq!(result.value(), 50);
    assert_eq!(result.neighbors().len(), 2);
}

/// The average uses only the k nearest values.
#[test]
fn far_points_excluded() {
    let points = vec![
        ValuedPoint::new(0.1, 0.1, 20),
        ValuedPoint::new(0.15, 0.1, 40),
        ValuedPoint::new(0.95, 0.95, 100),
    ];
    let result = estimate(&points, &Query::new(0.1, 0.1), 2).unwrap();
    assert_eq!(result.value(), 30);
}

/// Half-away-from-zero rounding on a .5 mean.
#[test]
fn half_rounds_up() {
    // [3, 4] -> mean 3.5 -> 4
    let points = vec![ValuedPoint::new(0.4, 0.5, 3), ValuedPoint::new(0.6, 0.5, 4)];
    let result = estimate(&points, &Query::new(0.5, 0.5), 2).unwrap();
    assert_eq!(result.value(), 4);
}

/// k = 1 returns the nearest value unchanged.
#[test]
fn k1_passthrough() {
    let points = vec![
        ValuedPoint::new(0.2, 0.2, 17),
        ValuedPoint::new(0.8, 0.8, 83),
    ];
    let result = estimate(&points, &Query::new(0.25, 0.2), 1).unwrap();
    assert_eq!(result.value(), 17);
}

/// k = n averages the whole dataset.
#[test]
fn k_equals_n() {
    let values = [0u32, 25, 50, 75, 100];
    let points: Vec<ValuedPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| ValuedPoint::new(i as f64 / 10.0, 0.4, v))
        .collect();
    let result = estimate(&points, &Query::new(0.9, 0.9), 5).unwrap();
    assert_eq!(result.value(), 50);
}

/// Extreme values stay within the dataset's range after rounding.
#[test]
fn result_within_value_range() {
    let points = vec![
        ValuedPoint::new(0.1, 0.5, 100),
        ValuedPoint::new(0.2, 0.5, 100),
        ValuedPoint::new(0.3, 0.5, 100),
    ];
    let result = estimate(&points, &Query::new(0.0, 0.5), 3).unwrap();
    assert_eq!(result.value(), 100);
}

/// Identical inputs produce identical estimates.
#[test]
fn deterministic() {
    let points = vec![
        ValuedPoint::new(0.11, 0.22, 13),
        ValuedPoint::new(0.33, 0.44, 57),
        ValuedPoint::new(0.55, 0.66, 91),
    ];
    let query = Query::new(0.4, 0.4);
    let first = estimate(&points, &query, 2).unwrap();
    for _ in 0..10 {
        assert_eq!(estimate(&points, &query, 2).unwrap(), first);
    }
}
