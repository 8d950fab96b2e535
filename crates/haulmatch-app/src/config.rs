//! Configuration management for haulmatch
//!
//! Config stored at: ~/.config/haulmatch/config.json

use haulmatch_infra::persistence::ReferenceDataPaths;
use haulmatch_types::{BucketCatalogKind, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the reference CSV files (defaults to the user data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Machine SWL table file name
    #[serde(default = "default_swl_file")]
    pub swl_file: String,

    /// Standard bucket catalog file name
    #[serde(default = "default_bucket_file")]
    pub bucket_file: String,

    /// Heavy-duty bucket catalog file name
    #[serde(default = "default_heavy_duty_bucket_file")]
    pub heavy_duty_bucket_file: String,

    /// Dump truck catalog file name
    #[serde(default = "default_dump_truck_file")]
    pub dump_truck_file: String,

    /// Catalog searched when the caller does not choose one
    #[serde(default)]
    pub default_catalog: BucketCatalogKind,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_swl_file() -> String {
    "excavator_swl.csv".to_string()
}

fn default_bucket_file() -> String {
    "bucket_data.csv".to_string()
}

fn default_heavy_duty_bucket_file() -> String {
    "bhc_bucket_data.csv".to_string()
}

fn default_dump_truck_file() -> String {
    "dump_trucks.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            swl_file: default_swl_file(),
            bucket_file: default_bucket_file(),
            heavy_duty_bucket_file: default_heavy_duty_bucket_file(),
            dump_truck_file: default_dump_truck_file(),
            default_catalog: BucketCatalogKind::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulmatch");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory the reference CSV files are read from
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulmatch");
        Ok(data_dir)
    }

    /// Full paths of every reference file
    pub fn reference_paths(&self) -> Result<ReferenceDataPaths> {
        let dir = self.data_dir()?;
        Ok(ReferenceDataPaths {
            swl: dir.join(&self.swl_file),
            standard_buckets: dir.join(&self.bucket_file),
            heavy_duty_buckets: dir.join(&self.heavy_duty_bucket_file),
            dump_trucks: dir.join(&self.dump_truck_file),
        })
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or fall back to defaults when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulmatch Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:          {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "SWL table:         {}", self.swl_file)?;
        writeln!(f, "Buckets:           {}", self.bucket_file)?;
        writeln!(f, "Heavy-duty:        {}", self.heavy_duty_bucket_file)?;
        writeln!(f, "Dump trucks:       {}", self.dump_truck_file)?;
        writeln!(f, "Default catalog:   {}", self.default_catalog)?;
        writeln!(f, "Output format:     {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
