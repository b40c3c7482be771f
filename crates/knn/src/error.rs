//! Error types for the pinpoint-knn crate.

/// Error type for all fallible operations in the pinpoint-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// Returned when the dataset slice is empty.
    #[error("no dataset points provided")]
    EmptyDataset,

    /// Returned when k is zero or exceeds the dataset size.
    #[error("k must be in 1..={n_points}, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of points in the dataset.
        n_points: usize,
    },

    /// Returned when a query coordinate is NaN or infinite.
    #[error("non-finite query coordinate ({x}, {y})")]
    NonFiniteQuery {
        /// Horizontal coordinate of the query.
        x: f64,
        /// Vertical coordinate of the query.
        y: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_dataset() {
        let e = PredictError::EmptyDataset;
        assert_eq!(e.to_string(), "no dataset points provided");
    }

    #[test]
    fn error_invalid_k() {
        let e = PredictError::InvalidK { k: 0, n_points: 10 };
        assert_eq!(e.to_string(), "k must be in 1..=10, got 0");

        let e = PredictError::InvalidK { k: 12, n_points: 9 };
        assert_eq!(e.to_string(), "k must be in 1..=9, got 12");
    }

    #[test]
    fn error_non_finite_query() {
        let e = PredictError::NonFiniteQuery { x: f64::NAN, y: 0.5 };
        assert_eq!(e.to_string(), "non-finite query coordinate (NaN, 0.5)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PredictError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PredictError>();
    }
}
