//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use rest_common::types::{
    WakeTime, MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_COFFEE_CUPS, MIN_SLEEP_HOURS,
    SLEEP_HOURS_STEP,
};

/// Restwell CLI
#[derive(Parser)]
#[command(name = "restctl")]
#[command(about = "Restwell - Bedtime advisor", long_about = None)]
#[command(version = env!("RESTWELL_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand (if not provided, advises with configured defaults)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the ideal bedtime
    Advise {
        /// Wake-up time (HH:MM or H:MM AM/PM)
        #[arg(long, value_parser = parse_wake_time)]
        wake: Option<WakeTime>,

        /// Desired sleep in hours (4-12, steps of 0.25)
        #[arg(long, value_parser = parse_sleep_hours)]
        sleep_hours: Option<f64>,

        /// Daily coffee intake in cups (1-10)
        #[arg(long, value_parser = parse_coffee_cups)]
        coffee: Option<u8>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show the active sleep model parameters
    Model,

    /// Configure Restwell settings
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

/// Parse and validate a wake time argument
pub fn parse_wake_time(s: &str) -> Result<WakeTime, String> {
    WakeTime::parse(s)
        .ok_or_else(|| format!("invalid time '{}': expected HH:MM or H:MM AM/PM", s))
}

/// Parse and validate a desired sleep argument against the form range
pub fn parse_sleep_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s
        .parse()
        .map_err(|_| format!("invalid number '{}'", s))?;
    if !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&hours) {
        return Err(format!(
            "sleep hours must be between {} and {}",
            MIN_SLEEP_HOURS, MAX_SLEEP_HOURS
        ));
    }
    // Stepper granularity: whole quarter hours only
    if (hours / SLEEP_HOURS_STEP).fract() != 0.0 {
        return Err(format!("sleep hours must be a multiple of {}", SLEEP_HOURS_STEP));
    }
    Ok(hours)
}

/// Parse and validate a coffee intake argument against the form range
pub fn parse_coffee_cups(s: &str) -> Result<u8, String> {
    let cups: u8 = s
        .parse()
        .map_err(|_| format!("invalid number '{}'", s))?;
    if !(MIN_COFFEE_CUPS..=MAX_COFFEE_CUPS).contains(&cups) {
        return Err(format!(
            "coffee cups must be between {} and {}",
            MIN_COFFEE_CUPS, MAX_COFFEE_CUPS
        ));
    }
    Ok(cups)
}
