//! Error codes and exit status for restctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a value fails validation (config --set)
pub const EXIT_INVALID_INPUT: i32 = 65;

/// Exit code when the estimator cannot produce a bedtime
pub const EXIT_ESTIMATION_FAILED: i32 = 69;
