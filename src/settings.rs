use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file; {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file; {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum SolverKind {
    RandomWalk,
    #[default]
    Tremaux,
    TremauxStall,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rows: i32,
    pub columns: i32,
    pub solver: SolverKind,
    pub max_steps: Option<usize>,
    pub log_level: LogLevel,
    pub color: bool,
    pub show_codes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            solver: SolverKind::default(),
            max_steps: Some(1_000_000),
            log_level: LogLevel::default(),
            color: true,
            show_codes: false,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pmaze")
            .join("settings.ron")
    }

    /// Reads settings from `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Self::from_ron(&settings_string),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_ron(settings_string: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(settings_string)?)
    }

    /// Overwrites the file at `path` with the commented default settings.
    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_matches_defaults() {
        assert_eq!(Settings::from_ron(DEFAULT_SETTINGS).unwrap(), Settings::default());
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("(rows: 12, solver: RandomWalk)").unwrap();
        assert_eq!(settings.rows, 12);
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.solver, SolverKind::RandomWalk);
        assert_eq!(settings.max_steps, Some(1_000_000));
    }

    #[test]
    fn max_steps_can_be_removed() {
        let settings = Settings::from_ron("(max_steps: None)").unwrap();
        assert_eq!(settings.max_steps, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            Settings::from_ron("(rows: \"five\")"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("pmaze-settings-that-does-not-exist.ron");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn reset_then_load() {
        let path = std::env::temp_dir()
            .join(format!("pmaze-test-{}", std::process::id()))
            .join("settings.ron");
        Settings::reset_config(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
