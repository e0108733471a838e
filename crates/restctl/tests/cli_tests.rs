//! CLI integration tests for restctl
//!
//! Tests the CLI surface:
//! - restctl advise    flag parsing, range validation, estimation flow
//! - restctl model     embedded and artifact-backed model display
//! - restctl config    key=value updates

use clap::Parser;
use rest_common::config::RestConfig;
use restctl::cli::{Cli, Commands};
use restctl::commands;
use restctl::errors::{EXIT_ESTIMATION_FAILED, EXIT_SUCCESS};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_advise_parses_all_flags() {
    let cli = parse(&[
        "restctl",
        "advise",
        "--wake",
        "6:45",
        "--sleep-hours",
        "7.75",
        "--coffee",
        "3",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Advise {
            wake,
            sleep_hours,
            coffee,
            json,
        }) => {
            let wake = wake.unwrap();
            assert_eq!((wake.hour, wake.minute), (6, 45));
            assert_eq!(sleep_hours, Some(7.75));
            assert_eq!(coffee, Some(3));
            assert!(json);
        }
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_advise_accepts_12h_wake_time() {
    let cli = parse(&["restctl", "advise", "--wake", "7:00 AM"]).unwrap();
    match cli.command {
        Some(Commands::Advise { wake, .. }) => {
            assert_eq!((wake.unwrap().hour, wake.unwrap().minute), (7, 0));
        }
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_bare_invocation_is_allowed() {
    let cli = parse(&["restctl"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_advise_rejects_out_of_range_sleep() {
    assert!(parse(&["restctl", "advise", "--sleep-hours", "3.5"]).is_err());
    assert!(parse(&["restctl", "advise", "--sleep-hours", "12.25"]).is_err());
    assert!(parse(&["restctl", "advise", "--sleep-hours", "8.1"]).is_err());
}

#[test]
fn test_advise_rejects_out_of_range_coffee() {
    assert!(parse(&["restctl", "advise", "--coffee", "0"]).is_err());
    assert!(parse(&["restctl", "advise", "--coffee", "11"]).is_err());
}

#[test]
fn test_advise_rejects_malformed_wake_time() {
    assert!(parse(&["restctl", "advise", "--wake", "25:00"]).is_err());
    assert!(parse(&["restctl", "advise", "--wake", "bedtime"]).is_err());
}

#[test]
fn test_advise_flow_succeeds_with_defaults() {
    let config = RestConfig::default();
    let code =
        commands::handle_advise(&config, None, None, None, true).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn test_advise_flow_fails_generically_with_missing_artifact() {
    let mut config = RestConfig::default();
    config.model.path = Some("/nonexistent/model.toml".into());

    let code =
        commands::handle_advise(&config, None, None, None, true).unwrap();
    assert_eq!(code, EXIT_ESTIMATION_FAILED);
}

#[test]
fn test_model_command_with_artifact() {
    use std::io::Write;

    let model = rest_common::predictor::LinearSleepModel::default();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", toml::to_string(&model).unwrap()).unwrap();

    let mut config = RestConfig::default();
    config.model.path = Some(file.path().to_path_buf());
    let code = commands::handle_model(&config).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
}
