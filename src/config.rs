//! Configuration management for Shelfmark

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub books_file: PathBuf,
    pub students_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeePolicy {
    /// Books a student may hold before the overdue charge applies
    pub max_books_before_fee: usize,
    /// Flat charge applied per collection pass
    pub charge: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub fees: FeePolicy,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let dir = config_dir.unwrap_or("config");

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Add environment variables (with prefix SHELFMARK_)
            .add_source(
                Environment::with_prefix("SHELFMARK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            fees: FeePolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            books_file: PathBuf::from("books.csv"),
            students_file: PathBuf::from("students.csv"),
        }
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            max_books_before_fee: 3,
            charge: 5.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
