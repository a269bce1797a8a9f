//! Runtime configuration read from the environment (and `.env` via dotenv).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Env var naming the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_PLANNER_LOG_CONFIG";
/// Env var selecting the default output format.
pub const ENV_FORMAT: &str = "SUBNET_PLANNER_FORMAT";

/// How results are written to stdout.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored report
    #[default]
    Text,
    /// Quoted CSV rows
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs yaml file.
    pub log_config: PathBuf,
    /// Output format used when no `--format` flag is given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unknown or bad values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => log::warn!("Ignoring {ENV_FORMAT}: {e}"),
            }
        }

        config
    }
}
