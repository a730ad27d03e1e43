use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use readmore_engine::{SearchSettings, DEFAULT_ENDPOINT};
use readmore_logging::{LevelFilter, LogDestination, LogOptions, DEFAULT_LOG_FILE};

/// Pick book categories and browse matching titles.
#[derive(Debug, Parser)]
#[command(name = "readmore", version, about)]
pub(crate) struct Args {
    /// Books search endpoint.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Abort a search after this many seconds (default: wait).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Maximum log level.
    #[arg(long, value_name = "LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also log to the terminal. Useful only when debugging.
    #[arg(long)]
    pub log_to_terminal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub search: SearchSettings,
    pub log: LogOptions,
}

impl Args {
    pub(crate) fn into_config(self) -> AppConfig {
        let destination = if self.log_to_terminal {
            LogDestination::Both
        } else {
            LogDestination::File
        };
        AppConfig {
            search: SearchSettings {
                endpoint: self.endpoint,
                request_timeout: self.timeout.map(Duration::from_secs),
                ..SearchSettings::default()
            },
            log: LogOptions {
                destination,
                level: self.log_level.into(),
                file_path: self.log_file,
            },
        }
    }
}
