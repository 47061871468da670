//! # Data Cleaning
//!
//! Imputation and filtering between the canonical table and the binning
//! stage: fill missing conditions, drop sparse data, and discard crystals
//! with too few measurements for a regression.

mod fill;
mod filter;


use crate::table::TableError;

pub use fill::{fill_missing_values, FillOptions, PressureFill, ROOM_PRESSURE, ROOM_TEMPERATURE};
pub use filter::{drop_nan, group_size_histogram, remove_few_entries, EntrySummary, RowSummary};

/// Errors raised while cleaning a table
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// A required column is absent
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// A TEMPERATURE or PRESSURE value is not a number
    #[error("Invalid number in column {column}: '{value}'")]
    InvalidNumber {
        /// Column name
        column: String,
        /// Offending value
        value: String,
    },
}
