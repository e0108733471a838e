//! Restctl library - exposes modules for integration tests

pub mod cli;
pub mod commands;
pub mod display;
pub mod errors;

/// Version embedded at build time
pub const VERSION: &str = env!("RESTWELL_VERSION");
