//! Error types for the pinpoint-session crate.

use pinpoint_dataset::DatasetError;
use pinpoint_knn::PredictError;

/// Error type for all fallible operations in the pinpoint-session crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Returned when a prediction is requested with no query point placed.
    #[error("no query point placed")]
    NoQuery,

    /// Dataset generation failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The predictor rejected its inputs.
    #[error(transparent)]
    Predict(#[from] PredictError),
}
