//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP clients for the classification and prediction services.
pub mod http;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use http::{ClassifyApiClient, PredictApiClient};
