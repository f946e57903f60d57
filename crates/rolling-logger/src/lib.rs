//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! mirrors every line to the browser console (stderr on native targets).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Circular in-memory logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Install as the global `log` backend.
    ///
    /// The logger lives for the rest of the program; the returned reference
    /// can be used to read the buffer back.
    pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, LoggerError> {
        let logger: &'static RollingLogger = Box::leak(Box::new(Self::new(capacity, level)));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(logger)
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

/// `2026-01-01T12:00:00.000Z INFO  target: message`
fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn mirror(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        mirror(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_latest_lines() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("test: line 2"));
        assert!(lines[2].ends_with("test: line 4"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].ends_with("shown"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.capacity(), 1);
        assert_eq!(logger.snapshot().len(), 1);
    }

    #[test]
    fn test_second_install_is_rejected() {
        let first = RollingLogger::init(10, LevelFilter::Info);
        assert!(first.is_ok());

        let Err(err) = RollingLogger::init(10, LevelFilter::Info) else {
            panic!("second install should fail");
        };
        assert!(matches!(err, LoggerError::AlreadyInstalled(_)));
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
