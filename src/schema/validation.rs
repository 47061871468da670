use crate::cif::{is_placeholder, parse_number};
use crate::table::{Cell, Table};

use super::columns::*;

/// Value kind a canonical column is allowed to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Numbers, or text that reads as a CIF number or placeholder
    Numeric,
    /// Short labels used for grouping
    Categorical,
    /// Free text
    Text,
    /// Nested structure metadata
    Structural,
}

/// Kinds of the canonical columns. Columns not listed are not checked.
pub const CANONICAL_KINDS: &[(&str, ColumnKind)] = &[
    (FORMULA, ColumnKind::Categorical),
    (SPACEGROUP_SYM, ColumnKind::Categorical),
    (SPACEGROUP_NO, ColumnKind::Numeric),
    (TEMPERATURE, ColumnKind::Numeric),
    (CELL_LENGTH_A, ColumnKind::Numeric),
    (CELL_LENGTH_B, ColumnKind::Numeric),
    (CELL_LENGTH_C, ColumnKind::Numeric),
    (ALPHA, ColumnKind::Numeric),
    (BETA, ColumnKind::Numeric),
    (GAMMA, ColumnKind::Numeric),
    (VOLUME, ColumnKind::Numeric),
    (PRESSURE, ColumnKind::Numeric),
    (DENSITY, ColumnKind::Numeric),
    (ELEMENT_COUNT, ColumnKind::Numeric),
    (DATABASE, ColumnKind::Categorical),
    (REFERENCE, ColumnKind::Text),
    (MODULE, ColumnKind::Structural),
    (CLASS, ColumnKind::Structural),
    (CHARGE, ColumnKind::Structural),
    (LATTICE, ColumnKind::Structural),
    (SITES, ColumnKind::Structural),
];

/// Pipeline boundary at which a table is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// After normalization: every canonical column holds its declared kind
    Canonical,
    /// After cleaning: additionally TEMPERATURE and PRESSURE are numbers and
    /// no cell is missing
    Clean,
}

/// Look up the declared kind of a canonical column
pub fn column_kind(name: &str) -> Option<ColumnKind> {
    CANONICAL_KINDS
        .iter()
        .find(|(column, _)| *column == name)
        .map(|(_, kind)| *kind)
}

/// Validate a table against the canonical kinds for a pipeline stage.
///
/// Returns the first violation found, scanning columns left to right.
pub fn validate_table(table: &Table, stage: Stage) -> Result<(), SchemaValidationError> {
    if table.index_name() != Some(ID) {
        return Err(SchemaValidationError::MissingIndex(ID.to_string()));
    }

    if stage == Stage::Clean {
        for required in [TEMPERATURE, PRESSURE] {
            if !table.has_column(required) {
                return Err(SchemaValidationError::MissingColumn(required.to_string()));
            }
        }
    }

    for (pos, name) in table.columns().iter().enumerate() {
        let kind = column_kind(name);
        for (row, cells) in table.rows().enumerate() {
            let cell = &cells[pos];
            if cell.is_missing() {
                if stage == Stage::Clean {
                    return Err(SchemaValidationError::MissingValue {
                        column: name.clone(),
                        row,
                    });
                }
                continue;
            }

            let strict_number = stage == Stage::Clean && (name == TEMPERATURE || name == PRESSURE);
            let ok = match kind {
                None => true,
                Some(_) if strict_number => matches!(cell, Cell::Number(_)),
                Some(kind) => cell_matches(name, kind, cell),
            };
            if !ok {
                return Err(SchemaValidationError::KindMismatch {
                    column: name.clone(),
                    row,
                    found: cell.kind_name().to_string(),
                });
            }
        }
    }

    Ok(())
}

fn cell_matches(name: &str, kind: ColumnKind, cell: &Cell) -> bool {
    match (kind, cell) {
        (ColumnKind::Numeric, Cell::Number(_)) => true,
        (ColumnKind::Numeric, Cell::Text(text)) => numeric_text(text),
        // PRESSURE is kept unjoined, so a looped value arrives as a one-item list
        (ColumnKind::Numeric, Cell::List(values)) if name == PRESSURE => {
            matches!(values.as_slice(), [text] if numeric_text(text))
        }
        (ColumnKind::Categorical | ColumnKind::Text, Cell::Text(_)) => true,
        (ColumnKind::Structural, _) => true,
        _ => false,
    }
}

fn numeric_text(text: &str) -> bool {
    is_placeholder(text) || parse_number(text).is_some()
}

/// Errors that can occur during schema validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// The table is not indexed by the expected column
    #[error("Table is not indexed by {0}")]
    MissingIndex(String),

    /// A required column is missing from the table
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A required value is missing
    #[error("Missing value in column '{column}' row {row}")]
    MissingValue {
        /// Column name
        column: String,
        /// Row position (0-based)
        row: usize,
    },

    /// A cell does not hold the column's declared kind
    #[error("Column '{column}' row {row}: unexpected {found} value")]
    KindMismatch {
        /// Column name
        column: String,
        /// Row position (0-based)
        row: usize,
        /// Kind of value found
        found: String,
    },
}
