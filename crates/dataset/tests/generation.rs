//! Integration tests for dataset generation.

use pinpoint_dataset::{DatasetConfig, DatasetError, generate_labeled, generate_valued};
use pinpoint_knn::{Label, PlanePoint};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default configuration yields 9–11 points with balanced classes, for both
/// variants, across many seeds.
#[test]
fn default_generation_invariants() {
    let config = DatasetConfig::new();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let labeled = generate_labeled(&config, &mut rng).unwrap();
        assert!((9..=11).contains(&labeled.len()), "seed {seed}");

        let a = labeled.iter().filter(|p| p.label() == Label::A).count();
        let b = labeled.len() - a;
        assert!(a.abs_diff(b) <= 1, "seed {seed}: unbalanced {a} vs {b}");

        for p in &labeled {
            assert!((0.0..1.0).contains(&p.x()), "seed {seed}");
            assert!((0.0..1.0).contains(&p.y()), "seed {seed}");
        }
    }
}

#[test]
fn valued_generation_invariants() {
    let config = DatasetConfig::new();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let valued = generate_valued(&config, &mut rng).unwrap();
        assert!((9..=11).contains(&valued.len()), "seed {seed}");
        for p in &valued {
            assert!(p.value() <= 100, "seed {seed}");
            assert!((0.0..1.0).contains(&p.x()), "seed {seed}");
            assert!((0.0..1.0).contains(&p.y()), "seed {seed}");
        }
    }
}

/// The same seed reproduces the same dataset; different seeds differ.
#[test]
fn reproducibility() {
    let config = DatasetConfig::new();

    let first = generate_valued(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let again = generate_valued(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(first, again);

    let other = generate_valued(&config, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_ne!(first, other);
}

/// Successive generations from one RNG replace the dataset wholesale.
#[test]
fn regeneration_is_wholesale() {
    let config = DatasetConfig::new();
    let mut rng = StdRng::seed_from_u64(9);
    let first = generate_labeled(&config, &mut rng).unwrap();
    let second = generate_labeled(&config, &mut rng).unwrap();
    assert_ne!(first, second);
}

/// Custom ranges are honored end to end.
#[test]
fn custom_ranges() {
    let config = DatasetConfig::new().with_size_range(3, 3).with_value_max(5);
    let mut rng = StdRng::seed_from_u64(0);
    let points = generate_valued(&config, &mut rng).unwrap();
    assert_eq!(points.len(), 3);
    for p in &points {
        assert!(p.value() <= 5);
    }
}

#[test]
fn invalid_configs_rejected() {
    let mut rng = StdRng::seed_from_u64(0);

    let result = generate_labeled(&DatasetConfig::new().with_size_range(0, 0), &mut rng);
    assert!(matches!(result, Err(DatasetError::InvalidSizeRange { .. })));

    let result = generate_valued(&DatasetConfig::new().with_value_max(0), &mut rng);
    assert!(matches!(result, Err(DatasetError::InvalidValueMax)));
}
