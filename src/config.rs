//! Configuration for the country registry
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "countries.csv";

/// Main configuration for a registry session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// CSV file the store is loaded from and saved to
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Width of the `=` rules drawn around tables
    pub table_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            table_width: 80,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the table rule width
    pub fn table_width(mut self, width: usize) -> Self {
        self.config.table_width = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
