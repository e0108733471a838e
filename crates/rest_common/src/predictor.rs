//! Predictor abstraction over the pre-trained sleep model.
//!
//! The estimator only sees the one-method [`Predictor`] trait, so any
//! regressor with the same signature can back it: the embedded linear
//! parameters, a TOML artifact, or a fake for testing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ModelConfig;
use crate::error::PredictionError;
use crate::types::{Prediction, PredictionInput};

/// Upper bound for a sane prediction (one full day, seconds).
const MAX_SLEEP_SECONDS: f64 = 24.0 * 3600.0;

/// Pre-trained regressor behind the estimator.
pub trait Predictor: Send + Sync {
    /// Predict actual sleep duration in seconds for a feature vector.
    fn predict(&self, input: &PredictionInput) -> Result<Prediction, PredictionError>;
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, input: &PredictionInput) -> Result<Prediction, PredictionError> {
        (**self).predict(input)
    }
}

/// Linear regression sleep model: three coefficients and an intercept.
///
/// `sleep_seconds = intercept + wake_coefficient * wake_seconds
///   + sleep_hours_coefficient * desired_sleep_hours
///   + coffee_coefficient * coffee_cups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSleepModel {
    pub intercept: f64,
    pub wake_coefficient: f64,
    pub sleep_hours_coefficient: f64,
    pub coffee_coefficient: f64,
}

impl Default for LinearSleepModel {
    /// Embedded parameters, fitted offline.
    fn default() -> Self {
        Self {
            intercept: 1200.0,
            wake_coefficient: 0.01,
            sleep_hours_coefficient: 3300.0,
            coffee_coefficient: 420.0,
        }
    }
}

impl LinearSleepModel {
    /// Load model parameters from a TOML artifact.
    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PredictionError::Artifact(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| PredictionError::Artifact(format!("{}: {}", path.display(), e)))
    }
}

impl Predictor for LinearSleepModel {
    fn predict(&self, input: &PredictionInput) -> Result<Prediction, PredictionError> {
        for (name, value) in [
            ("wake_seconds", input.wake_seconds),
            ("desired_sleep_hours", input.desired_sleep_hours),
            ("coffee_cups", input.coffee_cups),
        ] {
            if !value.is_finite() {
                return Err(PredictionError::NonFiniteInput(name));
            }
        }

        let sleep_seconds = self.intercept
            + self.wake_coefficient * input.wake_seconds
            + self.sleep_hours_coefficient * input.desired_sleep_hours
            + self.coffee_coefficient * input.coffee_cups;

        if !sleep_seconds.is_finite() {
            return Err(PredictionError::NonFiniteOutput);
        }
        if sleep_seconds <= 0.0 || sleep_seconds > MAX_SLEEP_SECONDS {
            return Err(PredictionError::OutOfRange(sleep_seconds));
        }

        trace!(
            "predicted {:.0}s sleep (wake={:.0}s hours={} coffee={})",
            sleep_seconds, input.wake_seconds, input.desired_sleep_hours, input.coffee_cups
        );
        Ok(Prediction { sleep_seconds })
    }
}

/// Predictor standing in for a configured artifact that could not be loaded.
///
/// Keeps the failure at estimate time so the caller sees a prediction error
/// instead of a startup crash.
pub struct UnavailableModel {
    reason: String,
}

impl Predictor for UnavailableModel {
    fn predict(&self, _input: &PredictionInput) -> Result<Prediction, PredictionError> {
        Err(PredictionError::Artifact(self.reason.clone()))
    }
}

/// Build the active predictor from configuration.
///
/// An artifact path that fails to load yields an [`UnavailableModel`] rather
/// than an error here; the cause surfaces on the first prediction.
pub fn predictor_from_config(model: &ModelConfig) -> Box<dyn Predictor> {
    match &model.path {
        None => Box::new(LinearSleepModel::default()),
        Some(path) => match LinearSleepModel::load(path) {
            Ok(loaded) => Box::new(loaded),
            Err(e) => Box::new(UnavailableModel {
                reason: e.to_string(),
            }),
        },
    }
}
