/// Errors from table construction and column operations
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// One or more requested columns are not present
    #[error("Missing column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The index column contains a repeated label
    #[error("Duplicate index label: {0}")]
    DuplicateIndex(String),

    /// The index column has a missing value
    #[error("Missing index value in row {row} of column {column}")]
    NullIndex {
        /// Index column name
        column: String,
        /// Row position (0-based)
        row: usize,
    },

    /// Nothing to concatenate
    #[error("Cannot build a table from zero records")]
    EmptyConcat,

    /// Tables being concatenated disagree about their index
    #[error("Cannot concatenate tables with different indexes")]
    IndexMismatch,

    /// A row has the wrong number of cells
    #[error("Row has {found} cells, table has {expected} columns")]
    RowWidth {
        /// Number of columns in the table
        expected: usize,
        /// Number of cells supplied
        found: usize,
    },
}

impl TableError {
    pub(crate) fn missing(column: impl Into<String>) -> Self {
        Self::MissingColumns(vec![column.into()])
    }
}
