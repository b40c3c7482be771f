//! Classification session state.

use rand::Rng;

use pinpoint_dataset::{DatasetConfig, generate_labeled};
use pinpoint_knn::{Classification, LabeledPoint, PredictError, classify};

use crate::error::SessionError;
use crate::query::QueryPoint;

/// Application state for the classification variant.
///
/// Owns the dataset, the configured k, and the current query point — the
/// explicit replacement for page-global mutable state. Callers hold exactly
/// one session per view and thread it through their event handlers.
#[derive(Debug, Clone)]
pub struct ClassifySession {
    config: DatasetConfig,
    dataset: Vec<LabeledPoint>,
    k: usize,
    query: Option<QueryPoint<Classification>>,
}

impl ClassifySession {
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
        let dataset = generate_labeled(&config, rng)?;
        Ok(Self {
            config,
            dataset,
            k,
            query: None,
        })
    }

    /// Returns the current dataset.
    pub fn dataset(&self) -> &[LabeledPoint] {
        &self.dataset
    }

    /// Returns the configured neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the current query point, if one is placed.
    pub fn query(&self) -> Option<&QueryPoint<Classification>> {
        self.query.as_ref()
    }

    /// Replaces the dataset wholesale and discards the query point.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if regeneration fails.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        self.dataset = generate_labeled(&self.config, rng)?;
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

    /// Changes k; a classified query point is re-classified with the new k.
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
            self.classify()?;
        }
        Ok(())
    }

    /// Classifies the current query point and persists the outcome on it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoQuery`] if no query point is placed, or a
    /// predictor error if k no longer fits the dataset.
    pub fn classify(&mut self) -> Result<&Classification, SessionError> {
        let query = self.query.as_mut().ok_or(SessionError::NoQuery)?;
        let result = classify(&self.dataset, query.query(), self.k)?;
        Ok(query.set_outcome(result))
    }
}
