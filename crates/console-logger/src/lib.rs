//! Console Logger
//!
//! `log` backend for the browser. Every record is written to the devtools
//! console (stderr when not running on wasm32) and the most recent lines are
//! kept in a fixed-size ring buffer; the app attaches the tail of it to
//! error notices.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with a bounded history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            recent: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(recent) => recent.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// The last `n` buffered lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lines();
        let skip = lines.len().saturating_sub(n);
        lines.into_iter().skip(skip).collect()
    }

    fn remember(&self, line: String) {
        let mut recent = match self.recent.lock() {
            Ok(recent) => recent,
            Err(poisoned) => poisoned.into_inner(),
        };
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(line);
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
        let line = format_record(record, Utc::now());
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Last `n` lines buffered by the global logger (empty before `init`)
pub fn recent_tail(n: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.tail(n)).unwrap_or_default()
}

fn format_record(record: &Record, now: DateTime<Utc>) -> String {
    format!(
        "[{} {} {}] {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
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
