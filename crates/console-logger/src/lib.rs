//! Console Logger
//!
//! `log` backend that writes to the browser console and keeps the most
//! recent records in a circular buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single-line rendering used for the console
    pub fn line(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.at.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Console logger with a bounded history
pub struct ConsoleLogger {
    capacity: usize,
    level: Mutex<LevelFilter>,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity,
            level: Mutex::new(level),
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Change the level of this logger and the global `log` filter
    pub fn set_level(&self, level: LevelFilter) {
        *self.level.lock().unwrap_or_else(|e| e.into_inner()) = level;
        log::set_max_level(level);
    }

    pub fn level(&self) -> LevelFilter {
        *self.level.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Most recent records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Buffered records rendered one per line, oldest first
    pub fn history(&self) -> String {
        self.recent()
            .iter()
            .map(LogEntry::line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            at: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(entry.level, &entry.line());
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install a leaked `ConsoleLogger` as the global logger
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("tests")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_most_recent() {
        let logger = ConsoleLogger::new(2, LevelFilter::Trace);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "two");
        assert_eq!(recent[1].message, "three");
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(8, LevelFilter::Warn);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::Error);
    }

    #[test]
    fn test_history_lists_buffered_lines_in_order() {
        let logger = ConsoleLogger::new(2, LevelFilter::Trace);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Warn, "two");
        emit(&logger, Level::Error, "three");

        let history = logger.history();
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[tests] two"));
        assert!(lines[1].ends_with("[tests] three"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(0, LevelFilter::Trace);
        emit(&logger, Level::Info, "dropped");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_line_contains_target_and_message() {
        let logger = ConsoleLogger::new(1, LevelFilter::Trace);
        emit(&logger, Level::Warn, "quota exceeded");
        let line = logger.recent()[0].line();
        assert!(line.contains("WARN"));
        assert!(line.contains("[tests] quota exceeded"));
    }
}
