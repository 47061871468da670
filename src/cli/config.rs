//! TOML configuration file for the `run` command.
//!
//! Pipeline settings live under `[pipeline]`, output paths under `[output]`:
//!
//! ```toml
//! # cifcte.toml
//! [pipeline]
//! min_entries = 4
//! bin_spacing = 5.0
//! pressure_fill = "room-pressure"
//!
//! [pipeline.renames]
//! _cell_measurement_temperature = "TEMPERATURE"
//!
//! [output]
//! cte = "results/cte.csv"
//! binned = "results/binned.parquet"
//! compression_level = 9
//! ```
//!
//! Command-line flags override values from the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use cifcte::pipeline::PipelineConfig;

/// Root configuration structure for cifcte.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where results are written.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// CTE CSV path.
    pub cte: Option<PathBuf>,

    /// Binned geometry path (.csv or .parquet).
    pub binned: Option<PathBuf>,

    /// ZSTD level for Parquet output (1-22).
    pub compression_level: Option<i32>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
