//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use super::storage::{ConfigError, StorageManager};

const APP_NAME: &str = "oxilens";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Default artifact name for the classified CSV.
pub const DEFAULT_OUTPUT_FILE: &str = "classified_logs.csv";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Service endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the log classification service.
    #[serde(default = "default_classify_url")]
    pub classify_base_url: String,

    /// Base URL of the price prediction service.
    #[serde(default = "default_predict_url")]
    pub predict_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            classify_base_url: default_classify_url(),
            predict_base_url: default_predict_url(),
        }
    }
}

/// Application configuration, TOML file merged with CLI arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Service endpoints.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the classified CSV artifact is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl AppConfig {
    /// Loads configuration: CLI arguments over the optional TOML file.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined or the
    /// config file cannot be read.
    pub fn load() -> Result<Self, ConfigError> {
        let args = <CliArgs as clap::Parser>::parse();
        let storage = StorageManager::new()?;
        let mut config = storage.load_config(args.config.as_deref())?;
        config.merge_with_args(args);
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(classify_url) = args.classify_url {
            self.api.classify_base_url = classify_url;
        }
        if let Some(predict_url) = args.predict_url {
            self.api.predict_base_url = predict_url;
        }
        if let Some(output) = args.output {
            self.output_path = output;
        }
    }

    /// Resolved log file path: explicit setting, else the platform default.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("oxilens.log"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            output_path: default_output_path(),
        }
    }
}

fn default_classify_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_predict_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.classify_base_url, "http://localhost:8000");
        assert_eq!(config.api.predict_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.output_path, PathBuf::from("classified_logs.csv"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            log_level = "debug"

            [api]
            classify_base_url = "http://logs.internal:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.classify_base_url, "http://logs.internal:9000");
        assert_eq!(config.api.predict_base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Warn),
            classify_url: Some("http://other:1234".to_string()),
            predict_url: None,
            output: Some(PathBuf::from("out.csv")),
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.api.classify_base_url, "http://other:1234");
        assert_eq!(config.api.predict_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }
}
