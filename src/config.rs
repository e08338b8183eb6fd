//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional log file, written in addition to stdout
    pub file: Option<String>,
}

/// How new book identifiers are generated
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Small increasing integers (1, 2, 3, ...)
    #[default]
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BooksConfig {
    pub id_strategy: IdStrategy,
    /// Load the fixed seed books at startup
    pub seed: bool,
    /// Report an empty author/title filter result as 404 instead of an empty list
    pub empty_filter_is_not_found: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DocsConfig {
    /// Mount Swagger UI and the OpenAPI document
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub books: BooksConfig,
    pub docs: DocsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. BOOKSHELF_SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            seed: true,
            empty_filter_is_not_found: true,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
