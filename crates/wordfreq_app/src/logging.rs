//! Logger initialization for wordfreq_app.
//!
//! Stdout carries the report, so every logger here writes to stderr.

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Quiet by default: a normal run prints nothing besides the report.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the global stderr logger. A second call is a no-op.
pub fn initialize() {
    // Ignore the error if a logger was already installed.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        DEFAULT_LEVEL,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
