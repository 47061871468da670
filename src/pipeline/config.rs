use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clean::{FillOptions, PressureFill, ROOM_PRESSURE, ROOM_TEMPERATURE};
use crate::ingest::IngestOptions;
use crate::normalize::NormalizeOptions;
use crate::schema::GeometryColumns;

/// Default minimum number of rows per crystal
pub const DEFAULT_MIN_ENTRIES: usize = 3;
/// Default temperature bin width (K)
pub const DEFAULT_BIN_SPACING: f64 = 10.0;

/// Settings for a full [`Pipeline`](super::Pipeline) run.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```toml
/// min_entries = 4
/// bin_spacing = 5.0
/// pressure_fill = "room-pressure"
///
/// [renames]
/// _cell_measurement_temperature = "TEMPERATURE"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Raw columns to keep; the built-in list when absent
    pub columns: Option<Vec<String>>,
    /// Raw → canonical renames; the built-in map when absent
    pub renames: Option<BTreeMap<String, String>>,
    /// Value for missing temperatures (K)
    pub room_temperature: f64,
    /// Value for missing pressures when `pressure_fill` is `room-pressure`
    pub room_pressure: f64,
    /// Which default fills missing pressures
    pub pressure_fill: PressureFill,
    /// Crystals with fewer rows are discarded
    pub min_entries: usize,
    /// Temperature bin width (K)
    pub bin_spacing: f64,
    /// Print the ingestion progress bar and report
    pub show_progress: bool,
    /// Temperature and geometry columns used for averaging and fitting
    pub geometry: GeometryColumns,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            columns: None,
            renames: None,
            room_temperature: ROOM_TEMPERATURE,
            room_pressure: ROOM_PRESSURE,
            pressure_fill: PressureFill::default(),
            min_entries: DEFAULT_MIN_ENTRIES,
            bin_spacing: DEFAULT_BIN_SPACING,
            show_progress: true,
            geometry: GeometryColumns::default(),
        }
    }
}

impl PipelineConfig {
    /// Ingestion options
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            show_progress: self.show_progress,
        }
    }

    /// Normalization options
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            columns: self.columns.clone(),
            renames: self.renames.as_ref().map(|renames| {
                renames
                    .iter()
                    .map(|(from, to)| (from.clone(), to.clone()))
                    .collect()
            }),
        }
    }

    /// Imputation options
    pub fn fill_options(&self) -> FillOptions {
        FillOptions {
            room_temperature: self.room_temperature,
            room_pressure: self.room_pressure,
            pressure_fill: self.pressure_fill,
        }
    }
}
