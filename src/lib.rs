//! # cifcte - Thermal Expansion from CIF Unit Cells
//!
//! `cifcte` estimates coefficients of thermal expansion (CTE) for crystals
//! measured at several temperatures, starting from directories of
//! Crystallographic Information Files exported by the Pauling File (PCD) and
//! the Inorganic Crystal Structure Database (ICSD).
//!
//! ## Pipeline
//!
//! ```text
//! .cif files ──► ingest ──► normalize ──► clean ──► binning ──► cte ──► export
//!               raw table   canonical    dense,     per-bin     ln-linear  CSV /
//!                           columns      ≥N rows    means       fits       Parquet
//! ```
//!
//! 1. [`ingest`] parses every `.cif` file of a directory into one raw
//!    record per file and reports the files that failed.
//! 2. [`normalize`] keeps the columns of interest, renames them to the
//!    canonical schema, indexes by `ID`, and canonicalizes formula,
//!    space group, element count and reference.
//! 3. [`clean`] fills missing temperature and pressure, drops sparse rows,
//!    and removes crystals with too few measurements.
//! 4. [`binning`] snaps temperatures to fixed-width bins and averages the
//!    cell geometry of each crystal per bin.
//! 5. [`cte`] fits `ln(quantity)` against temperature for the cell lengths
//!    and volume of every crystal.
//! 6. [`export`] writes the fits as CSV and the binned table as CSV or
//!    ZSTD-compressed Parquet.
//!
//! [`pipeline`] runs all of the above from a single [`PipelineConfig`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cifcte::prelude::*;
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let output = pipeline.run(&[Source::new("data/pcd", Database::Pcd)])?;
//!
//! for row in output.cte.rows() {
//!     println!("{}: volume CTE {:e} 1/K", row.key, row.fits[3].cte);
//! }
//! write_cte_csv("cte.csv", &output.cte)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output
//!
//! The CTE CSV has one row per crystal (`FORMULA`, `SPACEGROUP_SYM`) with a
//! `CTE <column>` and `R^2 <column>` pair for each of the a, b and c cell
//! lengths and the cell volume. The binned Parquet file stores units as
//! field metadata and `cifcte:format_version` in the footer.
//!
//! [`PipelineConfig`]: pipeline::PipelineConfig

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![allow(clippy::too_many_arguments)]

pub mod binning;
pub mod cif;
pub mod clean;
pub mod cte;
pub mod export;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod schema;
pub mod structure;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::binning::{
        average_temperature, temperature_bins, BinnedRow, BinnedTable, BinningError, GroupKey,
    };
    pub use crate::cif::{parse_number, CifDocument, CifError, CifValue};
    pub use crate::clean::{
        drop_nan, fill_missing_values, remove_few_entries, CleanError, EntrySummary, FillOptions,
        PressureFill, RowSummary,
    };
    pub use crate::cte::{estimate, AxisFit, CteError, CteRow, CteTable};
    pub use crate::export::{
        write_binned_csv, write_binned_parquet, write_cte_csv, ExportError, ParquetExportConfig,
    };
    pub use crate::ingest::{ingest_directory, Database, IngestError, IngestOptions, IngestReport};
    pub use crate::normalize::{normalize, Composition, NormalizeError, NormalizeOptions};
    pub use crate::pipeline::{
        Pipeline, PipelineConfig, PipelineError, PipelineOutput, PipelineSummary, Source,
    };
    pub use crate::schema::{columns, validate_table, GeometryColumns, Stage, CIFCTE_FORMAT_VERSION};
    pub use crate::structure::{Lattice, Structure, StructureError};
    pub use crate::table::{Cell, Record, Table, TableError};
}
