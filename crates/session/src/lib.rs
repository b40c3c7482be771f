//! Application state for the interactive KNN demo.
//!
//! The original demo kept its dataset and query point in page-global
//! mutables. This crate replaces them with explicit session objects the
//! caller owns and threads through its event handlers:
//!
//! | Event | Session call |
//! |-------|--------------|
//! | Randomize | [`ClassifySession::reset`] / [`EstimateSession::reset`] |
//! | Canvas click | `place_query` (clamps into the unit square) |
//! | Reset query | `clear_query` |
//! | Classify button | `classify` / `estimate` |
//! | K selector change | `set_k` (re-predicts a classified query) |
//!
//! # Quick start
//!
//! ```
//! use pinpoint_dataset::DatasetConfig;
//! use pinpoint_session::ClassifySession;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = ClassifySession::generate(DatasetConfig::new(), 3, &mut rng).unwrap();
//!
//! session.place_query(0.4, 0.6);
//! let result = session.classify().unwrap();
//! assert_eq!(result.neighbors().len(), 3);
//! ```

pub mod classify;
pub mod error;
pub mod estimate;
pub mod query;

pub use classify::ClassifySession;
pub use error::SessionError;
pub use estimate::EstimateSession;
pub use query::QueryPoint;
