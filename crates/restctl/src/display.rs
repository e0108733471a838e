//! Display helpers for restctl output.

use rest_common::config::RestConfig;
use rest_common::error::EstimationError;
use rest_common::predictor::LinearSleepModel;
use rest_common::types::{BedtimeAdvice, SleepPreferences, WakeTime};
use rest_common::ui::{self, colors};

use crate::VERSION;

const KW: usize = 15; // key width

/// "1 cup" / "N cups", as the form renders coffee intake
pub fn format_cups(cups: u8) -> String {
    if cups == 1 {
        "1 cup".to_string()
    } else {
        format!("{} cups", cups)
    }
}

/// Print the advise result display
pub fn print_advice(wake: WakeTime, prefs: &SleepPreferences, advice: &BedtimeAdvice) {
    ui::print_header("restctl", VERSION);

    ui::print_kv("wake_time", &wake.to_string(), KW);
    ui::print_kv("desired_sleep", &format!("{} hours", prefs.desired_sleep_hours), KW);
    ui::print_kv("coffee", &format_cups(prefs.coffee_cups), KW);
    println!();

    println!(
        "  Your ideal bedtime is {}{}{}{}",
        colors::OK,
        advice.formatted,
        colors::RESET,
        if advice.previous_day { " (the evening before)" } else { "" }
    );

    ui::print_footer();
}

/// Print the fixed estimation failure line
pub fn print_estimation_error(err: &EstimationError) {
    ui::print_err(&err.to_string());
}

/// Print the active model parameters
pub fn print_model(model: &LinearSleepModel, source: &str) {
    ui::print_header("restctl", VERSION);

    ui::print_kv("source", source, KW);
    ui::print_kv("intercept", &format!("{} s", model.intercept), KW);
    ui::print_kv("wake", &format!("{} s per wake second", model.wake_coefficient), KW);
    ui::print_kv("sleep_hours", &format!("{} s per desired hour", model.sleep_hours_coefficient), KW);
    ui::print_kv("coffee", &format!("{} s per daily cup", model.coffee_coefficient), KW);

    ui::print_footer();
}

/// Print the stored configuration
pub fn print_config(config: &RestConfig) {
    ui::print_header("restctl", VERSION);

    ui::print_kv("wake_time", &config.defaults.effective_wake_time().to_string(), KW);
    ui::print_kv("sleep_hours", &config.defaults.effective_sleep_hours().to_string(), KW);
    ui::print_kv("coffee_cups", &config.defaults.effective_coffee_cups().to_string(), KW);
    ui::print_kv("time_format", config.display.time_format.as_str(), KW);
    let model = match &config.model.path {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    };
    ui::print_kv("model", &model, KW);
    ui::print_kv("log_level", &config.log.level, KW);

    ui::print_footer();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cups_pluralization() {
        assert_eq!(format_cups(1), "1 cup");
        assert_eq!(format_cups(2), "2 cups");
        assert_eq!(format_cups(10), "10 cups");
    }
}
