//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each record to the browser console when running on wasm32.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a formatted line, dropping the oldest one when full
    fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Format a record as `timestamp LEVEL [target] message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        console::write(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it a second time returns an error
/// and leaves the first logger in place.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines recorded by the global logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn write(level: Level, line: &str) {
        let value = JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::log_1(&value),
            Level::Trace => web_sys::console::debug_1(&value),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use log::Level;

    pub fn write(_level: Level, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn record_line(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("care")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let logger = RollingLogger::new(LevelFilter::Trace, 2);
        record_line(&logger, Level::Info, "one");
        record_line(&logger, Level::Info, "two");
        record_line(&logger, Level::Info, "three");

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        record_line(&logger, Level::Info, "quiet");
        record_line(&logger, Level::Error, "loud");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("[care] loud"));
    }

    #[test]
    fn test_global_logger_keeps_recent_lines() {
        init(LevelFilter::Info, 8).unwrap();
        log::debug!("below level");
        log::info!("visit list loaded");

        let lines = recent();
        assert!(lines.last().is_some_and(|line| line.ends_with("visit list loaded")));
        assert!(!lines.iter().any(|line| line.contains("below level")));

        assert!(init(LevelFilter::Trace, 8).is_err());
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        record_line(&logger, Level::Info, "x");
        logger.clear();
        assert!(logger.lines().is_empty());
    }
}
