//! # Temperature Binning
//!
//! Merges near-duplicate measurement temperatures into nominal bins, then
//! averages the cell geometry of each crystal per bin. The result is a typed
//! [`BinnedTable`] that feeds the CTE regression and the exporters.

mod average;
mod bins;


use crate::table::TableError;

pub use average::{average_temperature, BinnedRow, BinnedTable, GroupKey};
pub use bins::temperature_bins;

/// Errors raised while binning or averaging
#[derive(Debug, thiserror::Error)]
pub enum BinningError {
    /// There are no rows to bin or average
    #[error("Cannot bin an empty table")]
    EmptyTable,

    /// Bin spacing must be a positive number of kelvin
    #[error("Invalid bin spacing: {0}")]
    InvalidSpacing(f64),

    /// A temperature or geometry cell is not a number
    #[error("Invalid number in column {column}: '{value}'")]
    InvalidNumber {
        /// Column name
        column: String,
        /// Offending value
        value: String,
    },

    /// A required column is absent
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl BinningError {
    fn invalid(column: &str, value: &str) -> Self {
        Self::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}
