//! Error types for the pinpoint-dataset crate.

/// Error type for all fallible operations in the pinpoint-dataset crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Returned when the configured size range is empty or starts at zero.
    #[error("dataset size range {min}..={max} is invalid")]
    InvalidSizeRange {
        /// Configured minimum number of points.
        min: usize,
        /// Configured maximum number of points.
        max: usize,
    },

    /// Returned when the configured value ceiling is zero.
    #[error("value_max must be >= 1")]
    InvalidValueMax,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_size_range() {
        let e = DatasetError::InvalidSizeRange { min: 5, max: 3 };
        assert_eq!(e.to_string(), "dataset size range 5..=3 is invalid");
    }

    #[test]
    fn error_invalid_value_max() {
        let e = DatasetError::InvalidValueMax;
        assert_eq!(e.to_string(), "value_max must be >= 1");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DatasetError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DatasetError>();
    }
}
