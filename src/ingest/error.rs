use std::path::PathBuf;

use crate::cif::CifError;
use crate::structure::StructureError;
use crate::table::TableError;

/// Errors that abort ingestion of a whole directory
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The directory could not be listed
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory being ingested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Not a single file in the directory could be loaded
    #[error("No records loaded from {directory} ({attempted} file(s) attempted)")]
    NoRecords {
        /// Directory being ingested
        directory: PathBuf,
        /// Number of `.cif` files found
        attempted: usize,
    },

    /// Merging records failed
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// Errors loading a single file. These are collected in the report and never
/// abort ingestion.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The file is not readable CIF
    #[error("CIF error: {0}")]
    Cif(#[from] CifError),

    /// The cell or atom sites could not be turned into a structure
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    /// The `data_` header has no block name to use as an identifier
    #[error("data_ block has an empty name")]
    EmptyBlockName,
}
