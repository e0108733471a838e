//! Error types for Restwell.

use thiserror::Error;

/// Failures raised by a [`Predictor`](crate::predictor::Predictor).
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("Non-finite feature: {0}")]
    NonFiniteInput(&'static str),

    #[error("Model produced a non-finite output")]
    NonFiniteOutput,

    #[error("Predicted sleep duration out of range: {0:.0} seconds")]
    OutOfRange(f64),
}

/// The single user-visible estimation failure.
///
/// `Display` is the fixed message shown to the user regardless of cause.
/// The cause is kept for debug logging and never surfaced.
#[derive(Error, Debug)]
#[error("Couldn't calculate bedtime")]
pub struct EstimationError {
    #[source]
    pub cause: PredictionError,
}
