use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use discovery_core::DiscoveryConfig;
use discovery_engine::FetchSettings;
use discovery_logging::LogDestination;
use log::LevelFilter;

/// Origin used when `--api-base` / `JOBS_API_BASE` is empty or unset.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

#[derive(Parser, Debug, Clone)]
#[command(name = "job-discovery", about = "Browse, filter and page through job listings")]
pub struct Cli {
    /// Origin of the jobs API.
    #[arg(long, env = "JOBS_API_BASE", default_value = "")]
    pub api_base: String,

    /// Directory holding the search ledger and the log file.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Quiet period before a filter edit triggers a search.
    #[arg(long, default_value_t = 400)]
    pub debounce_ms: u64,

    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn api_origin(&self) -> &str {
        let base = self.api_base.trim();
        if base.is_empty() {
            DEFAULT_API_ORIGIN
        } else {
            base
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            quiet_period: Duration::from_millis(self.debounce_ms),
        }
    }
}
