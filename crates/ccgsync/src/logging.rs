//! Logging setup.
//!
//! The audit trail goes to a rolling file (`ccgsync.log.YYYY-MM-DD` in the
//! log directory, working directory by default); the console only sees
//! warnings unless `-v`/`-vv` raises it. Status lines are printed
//! separately and never go through tracing.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install the global subscriber. The returned guard must live until the
/// process is done logging; dropping it flushes the file writer.
pub fn init(verbose: u8, log_dir: Option<&Path>) -> WorkerGuard {
    let dir = log_dir.unwrap_or_else(|| Path::new("."));
    let file_appender = tracing_appender::rolling::daily(dir, "ccgsync.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(file_filter);

    let console_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(console_level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
