//! Console Logger
//!
//! `log` backend for WebAssembly frontends.
//! - Writes every record to the browser console (stderr on native targets)
//! - Keeps the most recent lines in a fixed-size circular buffer so the UI can
//!   show a diagnostics panel without devtools open

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{Local, NaiveTime};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity line buffer. Oldest lines are dropped first.
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines in insertion order (oldest first)
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Logger installed as the global `log` backend
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    fn new(app_name: &'static str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name,
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            Local::now().time(),
            record.level(),
            self.app_name,
            record.target(),
            record.args(),
        );
        emit(record.level(), &line);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Calling this more than once returns the `SetLoggerError` from `log`.
pub fn init_logger(app_name: &'static str, level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines, oldest first. Empty if the logger was never installed.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.snapshot()))
        .unwrap_or_default()
}

fn format_line(time: NaiveTime, level: Level, app_name: &str, target: &str, args: &fmt::Arguments) -> String {
    format!("[{}] {:<5} {}::{}: {}", time.format("%H:%M:%S%.3f"), level, app_name, target, args)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let time = NaiveTime::from_hms_milli_opt(9, 5, 7, 42).unwrap();
        let line = format_line(time, Level::Warn, "Marketplace", "nav", &format_args!("moved to {}", "RESULTS"));
        assert_eq!(line, "[09:05:07.042] WARN  Marketplace::nav: moved to RESULTS");
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Info, 10);
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_logger_buffers_records() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Debug, 10);
        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .target("app")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("filtered"))
                .level(Level::Trace)
                .target("app")
                .build(),
        );

        let lines = logger.buffer.lock().unwrap().snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Test::app: hello"));
    }
}
