//! Core types for bedtime estimation.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sleep duration range offered by the presentation layer (hours).
pub const MIN_SLEEP_HOURS: f64 = 4.0;
pub const MAX_SLEEP_HOURS: f64 = 12.0;

/// Stepper increment for desired sleep (hours).
pub const SLEEP_HOURS_STEP: f64 = 0.25;

/// Coffee intake range offered by the presentation layer (cups per day).
pub const MIN_COFFEE_CUPS: u8 = 1;
pub const MAX_COFFEE_CUPS: u8 = 10;

/// Time of day the user intends to wake up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeTime {
    pub hour: u8,
    pub minute: u8,
}

impl WakeTime {
    /// Construct a wake time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parse from "HH:MM" (24h) or "H:MM AM/PM".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s.to_uppercase(), "%I:%M %p"))
            .ok()?;
        Self::new(time.hour() as u8, time.minute() as u8)
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60
    }

    /// The same instant as a `chrono` time of day.
    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// User preferences supplied by the form controls.
///
/// Ranges are enforced by the presentation layer before these reach the
/// estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepPreferences {
    /// Desired sleep in hours, [4, 12] in 0.25 steps
    pub desired_sleep_hours: f64,
    /// Daily coffee intake, [1, 10] cups
    pub coffee_cups: u8,
}

/// The exact three-feature vector consumed by the regression model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PredictionInput {
    pub wake_seconds: f64,
    pub desired_sleep_hours: f64,
    pub coffee_cups: f64,
}

/// Model output: estimated actual sleep duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub sleep_seconds: f64,
}

/// Result surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedtimeAdvice {
    /// Recommended bedtime as a time of day
    pub bedtime: NaiveTime,
    /// Whether the bedtime falls on the day before the wake time
    pub previous_day: bool,
    /// Predicted sleep duration backing the recommendation
    pub sleep_seconds: f64,
    /// Short rendering of `bedtime` (hour and minute only)
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_time_new_bounds() {
        assert!(WakeTime::new(0, 0).is_some());
        assert!(WakeTime::new(23, 59).is_some());
        assert!(WakeTime::new(24, 0).is_none());
        assert!(WakeTime::new(7, 60).is_none());
    }

    #[test]
    fn test_seconds_since_midnight() {
        let wake = WakeTime::new(7, 0).unwrap();
        assert_eq!(wake.seconds_since_midnight(), 7 * 3600);

        let late = WakeTime::new(23, 59).unwrap();
        assert_eq!(late.seconds_since_midnight(), 23 * 3600 + 59 * 60);
    }

    #[test]
    fn test_parse_24h() {
        assert_eq!(WakeTime::parse("07:00"), WakeTime::new(7, 0));
        assert_eq!(WakeTime::parse("7:30"), WakeTime::new(7, 30));
        assert_eq!(WakeTime::parse("23:15"), WakeTime::new(23, 15));
    }

    #[test]
    fn test_parse_12h() {
        assert_eq!(WakeTime::parse("7:00 AM"), WakeTime::new(7, 0));
        assert_eq!(WakeTime::parse("10:45 pm"), WakeTime::new(22, 45));
        assert_eq!(WakeTime::parse("12:00 AM"), WakeTime::new(0, 0));
        assert_eq!(WakeTime::parse("12:00 PM"), WakeTime::new(12, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(WakeTime::parse(""), None);
        assert_eq!(WakeTime::parse("25:00"), None);
        assert_eq!(WakeTime::parse("seven"), None);
        assert_eq!(WakeTime::parse("07:61"), None);
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(WakeTime::new(7, 5).unwrap().to_string(), "07:05");
    }
}
