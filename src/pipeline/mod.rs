//! # Pipeline
//!
//! Runs the stages end to end:
//!
//! ```text
//! ingest (per source) → concat → normalize → fill → drop_nan
//!     → remove_few_entries → temperature_bins → average → estimate
//! ```
//!
//! Every intermediate summary is returned alongside the final tables so a
//! caller can report what each stage removed.
//!
//! ```rust,no_run
//! use cifcte::ingest::Database;
//! use cifcte::pipeline::{Pipeline, PipelineConfig, Source};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let output = pipeline.run(&[
//!     Source::new("data/pcd", Database::Pcd),
//!     Source::new("data/icsd", Database::Icsd),
//! ])?;
//! println!("{} crystals", output.cte.len());
//! # Ok::<(), cifcte::pipeline::PipelineError>(())
//! ```

mod config;
mod summary;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::info;

use crate::binning::{average_temperature, temperature_bins, BinnedTable, BinningError};
use crate::clean::{
    drop_nan, fill_missing_values, group_size_histogram, remove_few_entries, CleanError,
    EntrySummary, RowSummary,
};
use crate::cte::{estimate, CteError, CteTable};
use crate::ingest::{ingest_directory, Database, IngestError, IngestReport};
use crate::normalize::{normalize, NormalizeError};
use crate::schema::{validate_table, SchemaValidationError, Stage};
use crate::table::{Table, TableError};

pub use config::{PipelineConfig, DEFAULT_BIN_SPACING, DEFAULT_MIN_ENTRIES};
pub use summary::PipelineSummary;

/// Errors from any pipeline stage
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No source directories were given
    #[error("No sources to ingest")]
    NoSources,

    /// Ingestion error
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Table error while combining sources
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Normalization error
    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Cleaning error
    #[error("Clean error: {0}")]
    Clean(#[from] CleanError),

    /// The cleaned table violates the schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaValidationError),

    /// Binning error
    #[error("Binning error: {0}")]
    Binning(#[from] BinningError),

    /// CTE estimation error
    #[error("CTE error: {0}")]
    Cte(#[from] CteError),
}

/// A directory of structure files from one database
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Directory holding `.cif` files
    pub directory: PathBuf,
    /// Database the files come from
    pub database: Database,
}

impl Source {
    /// Create a source
    pub fn new(directory: impl Into<PathBuf>, database: Database) -> Self {
        Self {
            directory: directory.into(),
            database,
        }
    }
}

/// Results of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One report per ingested source (empty for [`Pipeline::process`])
    pub ingest_reports: Vec<IngestReport>,
    /// Rows kept and removed by `drop_nan`
    pub row_summary: RowSummary,
    /// Number of crystals per group size before small groups were removed
    pub group_sizes: BTreeMap<usize, usize>,
    /// Rows and crystals kept and removed by `remove_few_entries`
    pub entry_summary: EntrySummary,
    /// Clean table that was binned
    pub clean: Table,
    /// Temperature-binned geometry
    pub binned: BinnedTable,
    /// Thermal expansion fits
    pub cte: CteTable,
}

impl PipelineOutput {
    /// Counts describing this run
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary::new(self)
    }
}

/// Configured pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Ingest every source and process the combined table.
    pub fn run(&self, sources: &[Source]) -> Result<PipelineOutput, PipelineError> {
        if sources.is_empty() {
            return Err(PipelineError::NoSources);
        }

        let options = self.config.ingest_options();
        let mut tables = Vec::with_capacity(sources.len());
        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            let ingested = ingest_directory(&source.directory, source.database, &options)?;
            tables.push(ingested.table);
            reports.push(ingested.report);
        }

        let raw = Table::concat(tables)?;
        info!("Ingested {} records from {} source(s)", raw.len(), sources.len());

        let mut output = self.process(&raw)?;
        output.ingest_reports = reports;
        Ok(output)
    }

    /// Run every stage after ingestion on a raw structure table.
    pub fn process(&self, raw: &Table) -> Result<PipelineOutput, PipelineError> {
        let config = &self.config;

        let canonical = normalize(raw, &config.normalize_options())?;
        let filled = fill_missing_values(&canonical, &config.fill_options())?;

        let (dense, row_summary) = drop_nan(&filled)?;
        info!(
            "drop_nan kept {} rows, removed {}",
            row_summary.kept_entries, row_summary.removed_entries
        );

        let group_sizes = group_size_histogram(&dense)?;
        let (clean, entry_summary) = remove_few_entries(&dense, config.min_entries)?;
        info!(
            "remove_few_entries kept {} crystals ({} rows), removed {} crystals ({} rows)",
            entry_summary.kept_crystals,
            entry_summary.kept_entries,
            entry_summary.removed_crystals,
            entry_summary.removed_entries
        );
        validate_table(&clean, Stage::Clean)?;

        let binned_table = temperature_bins(&clean, config.bin_spacing)?;
        let binned = average_temperature(&binned_table, &config.geometry)?;
        info!("Binned {} rows into {} temperature bins", clean.len(), binned.len());

        let cte = estimate(&binned)?;

        Ok(PipelineOutput {
            ingest_reports: Vec::new(),
            row_summary,
            group_sizes,
            entry_summary,
            clean,
            binned,
            cte,
        })
    }
}
