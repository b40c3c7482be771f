//! Synthetic dataset generation for the KNN scatterplot demo.
//!
//! Each call produces a fresh, ordered dataset of points on the unit square:
//! 9–11 points by default, with class labels balanced to within one point of
//! each other (classification) or integer values in `0..=100` (regression).
//!
//! # Quick start
//!
//! ```
//! use pinpoint_dataset::{DatasetConfig, generate_labeled};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = DatasetConfig::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let points = generate_labeled(&config, &mut rng).unwrap();
//! assert!((9..=11).contains(&points.len()));
//! ```
//!
//! Datasets are regenerated wholesale — there is no incremental mutation.
//! Determinism comes entirely from the caller's RNG seed.

pub mod config;
pub mod error;
pub mod generate;

pub use config::DatasetConfig;
pub use error::DatasetError;
pub use generate::{generate_labeled, generate_valued};
