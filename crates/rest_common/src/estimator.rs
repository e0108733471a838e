//! Bedtime estimation: one model inference plus one time-of-day subtraction.

use chrono::{Duration, NaiveTime};
use tracing::debug;

use crate::config::TimeFormat;
use crate::error::EstimationError;
use crate::predictor::Predictor;
use crate::types::{BedtimeAdvice, Prediction, PredictionInput, SleepPreferences, WakeTime};

/// Wraps the active predictor and answers one question: when should the
/// user go to bed to wake up rested at the given time?
pub struct BedtimeEstimator<P: Predictor> {
    predictor: P,
    format: TimeFormat,
}

impl<P: Predictor> BedtimeEstimator<P> {
    pub fn new(predictor: P, format: TimeFormat) -> Self {
        Self { predictor, format }
    }

    /// Estimate the ideal bedtime for a wake time and preferences.
    ///
    /// Pure computation over validated inputs plus one model call; identical
    /// arguments always produce identical advice. Subtraction wraps across
    /// midnight into the previous day when the predicted sleep is longer
    /// than the time elapsed since midnight.
    pub fn estimate(
        &self,
        wake: WakeTime,
        prefs: &SleepPreferences,
    ) -> Result<BedtimeAdvice, EstimationError> {
        let input = PredictionInput {
            wake_seconds: f64::from(wake.seconds_since_midnight()),
            desired_sleep_hours: prefs.desired_sleep_hours,
            coffee_cups: f64::from(prefs.coffee_cups),
        };

        let Prediction { sleep_seconds } = self.predictor.predict(&input).map_err(|cause| {
            debug!("prediction failed for wake {}: {}", wake, cause);
            EstimationError { cause }
        })?;

        let sleep = Duration::seconds(sleep_seconds.round() as i64);
        let (bedtime, wrap) = wake.as_naive_time().overflowing_sub_signed(sleep);

        Ok(BedtimeAdvice {
            bedtime,
            previous_day: wrap != 0,
            sleep_seconds,
            formatted: format_short(bedtime, self.format),
        })
    }
}

/// Short time rendering, hour and minute only.
pub fn format_short(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::H12 => time.format("%-I:%M %p").to_string(),
        TimeFormat::H24 => time.format("%H:%M").to_string(),
    }
}
