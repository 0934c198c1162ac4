//! Console Logger
//!
//! `log` backend for WASM front-ends. Records are written to the browser
//! console with a `[TARGET] LEVEL message` prefix; on native targets (tests)
//! they go to stderr instead.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
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
        let line = format_record(record.level(), record.target(), record.args());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format a record as `[TAG] LEVEL message`
pub fn format_record(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{}] {} {}", tag_for(target), level, args)
}

/// Short uppercase tag from a module path: `todo_list_ui::sync` -> `SYNC`
fn tag_for(target: &str) -> String {
    target
        .rsplit("::")
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("APP")
        .to_uppercase()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
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
    fn test_format_uses_last_module_segment() {
        let line = format_record(Level::Error, "todo_list_ui::sync", &format_args!("fetch failed: {}", 503));
        assert_eq!(line, "[SYNC] ERROR fetch failed: 503");
    }

    #[test]
    fn test_format_plain_target() {
        let line = format_record(Level::Info, "app", &format_args!("mounted"));
        assert_eq!(line, "[APP] INFO mounted");
    }

    #[test]
    fn test_empty_target_falls_back_to_app() {
        assert_eq!(tag_for(""), "APP");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("x").build();
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
