//! Logging for the chordmap binary
//!
//! The library logs every lookup and store change at `debug` and every rejected
//! configuration line at `warn`. `resolve` alone emits one event per call, so
//! the console stays at `warn` unless `RUST_LOG` says otherwise:
//! - `RUST_LOG=chordmap::keymap::config=debug` - directives as they are applied
//! - `RUST_LOG=chordmap::keymap=debug` - also every resolve and chord table write
//!
//! This crate's `debug` stream always goes to `logs/chordmap.log` under the config
//! directory, rotated daily, so `check` runs can be inspected afterwards.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "chordmap.log";

/// Debug for this crate only; dependencies stay at warn
const FILE_FILTER: &str = "warn,chordmap=debug";

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so that command output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(FILE_FILTER)),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
