//! Command handlers for restctl.
//!
//! Each handler returns the process exit code; errors that reach main are
//! rendered there and exit with the general error code.

use anyhow::Result;
use rest_common::config::{RestConfig, TimeFormat};
use rest_common::estimator::BedtimeEstimator;
use rest_common::predictor::{predictor_from_config, LinearSleepModel};
use rest_common::types::{SleepPreferences, WakeTime};
use rest_common::ui;
use tracing::debug;

use crate::cli;
use crate::display;
use crate::errors::{EXIT_ESTIMATION_FAILED, EXIT_GENERAL_ERROR, EXIT_INVALID_INPUT, EXIT_SUCCESS};

/// Handle advise command
pub fn handle_advise(
    config: &RestConfig,
    wake: Option<WakeTime>,
    sleep_hours: Option<f64>,
    coffee: Option<u8>,
    json: bool,
) -> Result<i32> {
    let wake = wake.unwrap_or_else(|| config.defaults.effective_wake_time());
    let prefs = SleepPreferences {
        desired_sleep_hours: sleep_hours.unwrap_or_else(|| config.defaults.effective_sleep_hours()),
        coffee_cups: coffee.unwrap_or_else(|| config.defaults.effective_coffee_cups()),
    };

    let predictor = predictor_from_config(&config.model);
    let estimator = BedtimeEstimator::new(predictor, config.display.time_format);

    match estimator.estimate(wake, &prefs) {
        Ok(advice) => {
            if json {
                let payload = serde_json::json!({
                    "wake_time": wake.to_string(),
                    "desired_sleep_hours": prefs.desired_sleep_hours,
                    "coffee_cups": prefs.coffee_cups,
                    "sleep_seconds": advice.sleep_seconds,
                    "bedtime": advice.formatted,
                    "previous_day": advice.previous_day,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                display::print_advice(wake, &prefs, &advice);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            debug!("estimation failed: {:?}", err);
            if json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                display::print_estimation_error(&err);
            }
            Ok(EXIT_ESTIMATION_FAILED)
        }
    }
}

/// Handle model command
pub fn handle_model(config: &RestConfig) -> Result<i32> {
    match &config.model.path {
        None => {
            display::print_model(&LinearSleepModel::default(), "embedded");
            Ok(EXIT_SUCCESS)
        }
        Some(path) => match LinearSleepModel::load(path) {
            Ok(model) => {
                display::print_model(&model, &format!("artifact {}", path.display()));
                Ok(EXIT_SUCCESS)
            }
            Err(err) => {
                debug!("model artifact load failed: {}", err);
                ui::print_err("Model artifact could not be loaded");
                Ok(EXIT_GENERAL_ERROR)
            }
        },
    }
}

/// Handle config command
pub fn handle_config(set: Option<String>) -> Result<i32> {
    let mut config = RestConfig::load();

    let Some(kv) = set else {
        display::print_config(&config);
        return Ok(EXIT_SUCCESS);
    };

    let Some((key, value)) = kv.split_once('=') else {
        ui::print_err("Expected key=value");
        return Ok(EXIT_INVALID_INPUT);
    };

    match apply_set(&mut config, key.trim(), value.trim()) {
        Ok(()) => {
            config.save()?;
            ui::print_ok(&format!("{} updated", key.trim()));
            Ok(EXIT_SUCCESS)
        }
        Err(reason) => {
            ui::print_err(&reason);
            Ok(EXIT_INVALID_INPUT)
        }
    }
}

/// Apply a single key=value update, validating like the advise flags
pub fn apply_set(config: &mut RestConfig, key: &str, value: &str) -> Result<(), String> {
    match key {
        "wake_time" => {
            let wake = cli::parse_wake_time(value)?;
            config.defaults.wake_time = wake.to_string();
        }
        "sleep_hours" => {
            config.defaults.sleep_hours = cli::parse_sleep_hours(value)?;
        }
        "coffee_cups" => {
            config.defaults.coffee_cups = cli::parse_coffee_cups(value)?;
        }
        "time_format" => {
            config.display.time_format = match value {
                "12h" => TimeFormat::H12,
                "24h" => TimeFormat::H24,
                _ => return Err(format!("invalid time format '{}': expected 12h or 24h", value)),
            };
        }
        "model_path" => {
            config.model.path = if value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        "log_level" => {
            if !["trace", "debug", "info", "warn", "error"].contains(&value) {
                return Err(format!("invalid log level '{}'", value));
            }
            config.log.level = value.to_string();
        }
        _ => return Err(format!("unknown config key '{}'", key)),
    }
    Ok(())
}
