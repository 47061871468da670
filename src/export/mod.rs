//! # Export
//!
//! Writes pipeline results to disk:
//!
//! - CTE fits as CSV ([`write_cte_csv`])
//! - the temperature-binned geometry table as CSV ([`write_binned_csv`]) or
//!   as ZSTD-compressed Parquet ([`write_binned_parquet`])
//!
//! The Parquet file carries the binned Arrow schema, including per-column
//! `unit` metadata and the `cifcte:format_version` key.

mod csv_writer;
mod parquet_writer;


pub use csv_writer::{write_binned_csv, write_binned_csv_to, write_cte_csv, write_cte_csv_to};
pub use parquet_writer::{write_binned_parquet, write_binned_parquet_to, ParquetExportConfig};

/// Errors that can occur while exporting
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Arrow error
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),
}
