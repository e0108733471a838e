//! Restwell Control - bedtime advisor CLI
//!
//! Asks for a wake-up time, desired sleep, and coffee intake, and answers
//! with an ideal bedtime from the pre-trained sleep model.

use anyhow::Result;
use clap::Parser;
use rest_common::config::RestConfig;
use rest_common::ui;
use tracing_subscriber::EnvFilter;

use restctl::cli::{Cli, Commands};
use restctl::commands;
use restctl::errors::EXIT_GENERAL_ERROR;

fn main() {
    let cli = Cli::parse();
    let config = RestConfig::load();

    // Initialize logging (RESTWELL_LOG overrides the configured level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RESTWELL_LOG")
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli, &config) {
        Ok(code) => code,
        Err(err) => {
            ui::print_err(&err.to_string());
            EXIT_GENERAL_ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli, config: &RestConfig) -> Result<i32> {
    match cli.command {
        // Bare invocation behaves like the form opening with its defaults
        None => commands::handle_advise(config, None, None, None, false),
        Some(Commands::Advise {
            wake,
            sleep_hours,
            coffee,
            json,
        }) => commands::handle_advise(config, wake, sleep_hours, coffee, json),
        Some(Commands::Model) => commands::handle_model(config),
        Some(Commands::Config { set }) => commands::handle_config(set),
    }
}
