//! Rest Common - shared types and the bedtime estimation core for Restwell.
//!
//! The estimator is a pure function over validated inputs plus one model
//! call. Everything else here is configuration and terminal plumbing.

pub mod config;
pub mod error;
pub mod estimator;
pub mod predictor;
pub mod types;
pub mod ui;

pub use error::{EstimationError, PredictionError};
pub use estimator::BedtimeEstimator;
pub use predictor::{LinearSleepModel, Predictor};
pub use types::*;
