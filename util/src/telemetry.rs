//! Defines helpers for logging

pub use tracing_subscriber::{filter::LevelFilter, fmt::format::Format};

/// Initialize a compact, single-line logger at the given log level
///
/// Used by the command line scripts, whose output is read interactively
pub fn setup_compact_logger(level: LevelFilter) {
    tracing_subscriber::fmt()
        .event_format(Format::default().compact().with_target(false))
        .with_max_level(level)
        .init();
}
