//! Minimal `log` backend for the command-line front end.
//!
//! Lines are written to stderr as `[LEVEL][target] message` so that rendered
//! HTML on stdout stays clean.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use owo_colors::OwoColorize;

/// Logger that writes every enabled record to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
    colored: bool,
}

impl StderrLogger {
    /// Create a logger that accepts records up to `level`.
    #[must_use]
    pub const fn new(level: LevelFilter, colored: bool) -> Self {
        Self { level, colored }
    }

    /// Format one record without the trailing newline.
    #[must_use]
    pub fn format(&self, record: &Record<'_>) -> String {
        let tag = record.level().as_str();
        let tag = if self.colored {
            match record.level() {
                Level::Error => tag.red().bold().to_string(),
                Level::Warn => tag.yellow().bold().to_string(),
                Level::Info => tag.green().to_string(),
                Level::Debug => tag.blue().to_string(),
                Level::Trace => tag.dimmed().to_string(),
            }
        } else {
            tag.to_string()
        };
        format!("[{tag}][{}] {}", record.target(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Install a [`StderrLogger`] as the global logger.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
pub fn init(level: LevelFilter, colored: bool) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level, colored)))
        .map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        let logger = StderrLogger::new(LevelFilter::Debug, false);
        let line = logger.format(
            &Record::builder()
                .level(Level::Warn)
                .target("render")
                .args(format_args!("void element <br>"))
                .build(),
        );
        assert_eq!(line, "[WARN][render] void element <br>");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::new(LevelFilter::Info, false);
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
