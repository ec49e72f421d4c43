use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

enum LogTarget {
    Stderr,
}

/// Progress logger for the feed: one timestamped line per event on stderr.
pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    fn render(record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let msg = Self::render(record);

            match &self.target {
                LogTarget::Stderr => {
                    eprintln!("{msg}")
                }
            }
        }
    }

    fn flush(&self) {}
}

// The feed reports every record it sends at info, so that is the floor
// unless the environment asks for something else.
fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Info)
}

pub fn init() -> Result<(), SetLoggerError> {
    _init(get_level_from_env())
}

pub fn _init(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger; later calls must not move
    // the max level away from the level the installed logger was built with.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
