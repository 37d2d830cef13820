use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::error::SpatialHashError;

/// Forwards `log` records to the browser console, one console method per level.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::log_1(&line),
            Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn parse_level(level: &str) -> Result<LevelFilter, SpatialHashError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| SpatialHashError::InvalidLogLevel(level.to_string()))
}

/// Installs [`ConsoleLogger`] as the global logger. Calling it again only
/// adjusts the level.
pub fn init(level: &str) -> Result<(), SpatialHashError> {
    let filter = parse_level(level)?;
    // a logger is already installed on repeat calls
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    Ok(())
}
