//! Log setup for the binary.
//!
//! The library only emits through the `log` facade; `init_logging` wires a
//! file logger (and a terminal logger for warnings) behind it.

use crate::errors::AppError;
use crate::storage::create_file_parent;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "./.instance/sharing-contacts.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// Accepts `off`, `error`, `warn`, `info`, `debug` and `trace`, any case.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Validation(format!("Unknown log level: '{}'", level)))
}

/// Installs the global logger. Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<(), AppError> {
    create_file_parent(&config.path)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(config.level, file_config, log_file)];

    // TERM is unset under most test harnesses and pipes
    if std::env::var("TERM").is_ok() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers)?;

    log::debug!(
        "Logging to {} at level {:?}",
        config.path.display(),
        config.level
    );
    Ok(())
}
