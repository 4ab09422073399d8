//! Minimal `log` backend printing records to stderr.

use anyhow::{Result, anyhow};
use log::{LevelFilter, Log, Metadata, Record};

static STDERR_LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{level:<5} {file}:{line}: {args}",
                level = record.level(),
                file = record.file().unwrap_or_default(),
                line = record.line().unwrap_or_default(),
                args = record.args(),
            );
        }
    }

    fn flush(&self) {}
}

/// Map the number of `-v` flags to a level; warnings are always shown.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger.
///
/// # Errors
///
/// Fails if a logger was already installed.
pub fn init(verbosity: u8) -> Result<()> {
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set logger: {error}"))?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
