//! Regression session state.

use rand::Rng;

use pinpoint_dataset::{DatasetConfig, generate_valued};
use pinpoint_knn::{Estimate, PredictError, ValuedPoint, estimate};

use crate::error::SessionError;
use crate::query::QueryPoint;

/// Application state for the regression variant.
///
/// Mirrors [`ClassifySession`](crate::classify::ClassifySession) over valued
/// points: the prediction averages neighbor values instead of voting.
#[derive(Debug, Clone)]
pub struct EstimateSession {
    config: DatasetConfig,
    dataset: Vec<ValuedPoint>,
    k: usize,
    query: Option<QueryPoint<Estimate>>,
}

impl EstimateSession {
    /// Creates a session with a freshly generated dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the dataset configuration is invalid.
    pub fn generate(
        config: DatasetConfig,
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, SessionError> {
        let dataset = generate_valued(&config, rng)?;
        Ok(Self {
            config,
            dataset,
            k,
            query: None,
        })
    }

    /// Returns the current dataset.
    pub fn dataset(&self) -> &[ValuedPoint] {
        &self.dataset
    }

    /// Returns the configured neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the current query point, if one is placed.
    pub fn query(&self) -> Option<&QueryPoint<Estimate>> {
        self.query.as_ref()
    }

    /// Replaces the dataset wholesale and discards the query point.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if regeneration fails.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        self.dataset = generate_valued(&self.config, rng)?;
        self.query = None;
        Ok(())
    }

    /// Places a new (unclassified) query point, clamping into `[0, 1]`.
    ///
    /// Any previous query point and its outcome are discarded.
    pub fn place_query(&mut self, x: f64, y: f64) {
        self.query = Some(QueryPoint::place(x, y));
    }

    /// Discards the query point.
    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Changes k; a classified query point is re-estimated with the new k.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if `k` is outside `1..=dataset.len()`.
    pub fn set_k(&mut self, k: usize) -> Result<(), SessionError> {
        if k < 1 || k > self.dataset.len() {
            return Err(SessionError::Predict(PredictError::InvalidK {
                k,
                n_points: self.dataset.len(),
            }));
        }
        self.k = k;
        if self.query.as_ref().is_some_and(QueryPoint::is_classified) {
            self.estimate()?;
        }
        Ok(())
    }

    /// Estimates a value for the current query point and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoQuery`] if no query point is placed, or a
    /// predictor error if k no longer fits the dataset.
    pub fn estimate(&mut self) -> Result<&Estimate, SessionError> {
        let query = self.query.as_mut().ok_or(SessionError::NoQuery)?;
        let result = estimate(&self.dataset, query.query(), self.k)?;
        Ok(query.set_outcome(result))
    }
}
