use std::{
    io::{self, Write},
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

/// Installs the stderr logger. Can only succeed once per process.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        // a poisoned lock still holds a usable level
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }
}

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        log::Level::Info => Color::White,
        log::Level::Debug => Color::Blue,
        log::Level::Trace => Color::BrightBlack,
    }
}

pub fn format_message(level: log::Level, source: &str, message: &str) -> String {
    format!(
        "{} {} -> {}",
        format!("{:>5}", level).color(level_color(level)),
        source.dimmed(),
        message
    )
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_message(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            // nowhere left to report a failed stderr write
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_min_level() {
        let logger = AppLogger::new(log::LevelFilter::Warn);
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(log::LevelFilter::Trace);
        assert!(logger.enabled(&debug));

        logger.set_min_level(log::LevelFilter::Off);
        assert!(!logger.enabled(&warn));
    }

    #[test]
    fn message_layout() {
        colored::control::set_override(false);
        assert_eq!(
            format_message(log::Level::Info, "pmaze::app", "seed 42"),
            " INFO pmaze::app -> seed 42"
        );
    }
}
