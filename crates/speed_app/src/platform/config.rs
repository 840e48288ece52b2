//! Console configuration, read from a RON file.
//!
//! ```ron
//! (
//!     base_url: "https://speed.example.org",
//!     request_timeout_secs: 15,
//!     log_destination: "both",
//! )
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use speed_engine::EngineSettings;
use speed_logging::{LogDestination, DEFAULT_LOG_FILE};
use thiserror::Error;

use crate::cli::Cli;

pub(crate) const CONFIG_FILENAME: &str = "speed.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub update_path: String,
    pub articles_path: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_destination: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            base_url: engine.base_url,
            update_path: engine.update_path,
            articles_path: engine.articles_path,
            connect_timeout_secs: engine.connect_timeout.as_secs(),
            request_timeout_secs: engine.request_timeout.as_secs(),
            log_destination: "terminal".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Loads `explicit`, or `./speed.ron` when no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit.map_or_else(|| PathBuf::from(CONFIG_FILENAME), Path::to_path_buf);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path,
            message: err.to_string(),
        })
    }

    /// Applies command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(log) = cli.log {
            self.log_destination = match log {
                crate::cli::LogArg::File => "file",
                crate::cli::LogArg::Terminal => "terminal",
                crate::cli::LogArg::Both => "both",
            }
            .to_string();
        }
        self
    }

    pub fn log_destination(&self) -> LogDestination {
        LogDestination::parse(&self.log_destination).unwrap_or_default()
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            base_url: self.base_url.clone(),
            update_path: self.update_path.clone(),
            articles_path: self.articles_path.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
