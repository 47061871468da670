//! # Schema Normalization
//!
//! Turns the raw ingested table into the canonical table: projects the
//! columns of interest, renames them, indexes by `ID`, and rewrites the
//! textual fields into their canonical forms.
//!
//! | Column | Canonical form |
//! |--------|----------------|
//! | list cells | joined with `", "` (except DATABASE, PRESSURE and structure fields) |
//! | FORMULA | `Element+Count` with no separators, e.g. `Fe2O3` |
//! | SPACEGROUP_SYM | no whitespace, `~` or parentheses; `originchoice2` → ` O2` |
//! | ELEMENT_COUNT | number of listed atom types |
//! | REFERENCE | `(<year>) <volume>, <first>-<last>` |

mod formula;

#[cfg(test)]
mod tests;

use log::info;

use crate::schema::{
    validate_table, SchemaValidationError, Stage, DEFAULT_COLUMNS, DEFAULT_RENAMES,
    ELEMENT_COUNT, FORMULA, ID, JOURNAL_PAGE_FIRST, JOURNAL_PAGE_LAST, JOURNAL_VOLUME,
    REFERENCE, SPACEGROUP_SYM, UNJOINED_COLUMNS,
};
use crate::table::{Cell, Table, TableError};

pub use formula::{Composition, FormulaError};

/// Rendering of a missing citation part
const MISSING_PART: &str = "n/a";

/// Errors raised while normalizing a table
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Column projection, rename or indexing failed
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// A FORMULA value could not be parsed
    #[error("Invalid formula '{value}': {reason}")]
    Formula {
        /// Offending value after whitespace removal
        value: String,
        /// Parser error
        reason: FormulaError,
    },

    /// The normalized table does not satisfy the canonical schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaValidationError),
}

/// Column selection and renaming for [`normalize`]. `None` selects the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Raw columns to keep
    pub columns: Option<Vec<String>>,
    /// Raw → canonical renames
    pub renames: Option<Vec<(String, String)>>,
}

/// Project onto a column list ([`DEFAULT_COLUMNS`] when `None`).
///
/// Every absent column is reported in a single error.
pub fn keep_columns(table: &Table, columns: Option<&[&str]>) -> Result<Table, TableError> {
    table.select(columns.unwrap_or(DEFAULT_COLUMNS))
}

/// Rename columns ([`DEFAULT_RENAMES`] when `None`) and index the table by `ID`.
///
/// A table that is already indexed by `ID` keeps its index.
pub fn rename_columns(table: &Table, renames: Option<&[(&str, &str)]>) -> Result<Table, TableError> {
    let renamed = table.rename(renames.unwrap_or(DEFAULT_RENAMES));
    if renamed.index_name() == Some(ID) {
        return Ok(renamed);
    }
    renamed.set_index(ID)
}

/// Rewrite textual fields into their canonical forms.
pub fn remove_characters(table: &Table) -> Result<Table, NormalizeError> {
    let mut table = table.clone();

    let joined: Vec<String> = table
        .columns()
        .iter()
        .filter(|column| !UNJOINED_COLUMNS.contains(&column.as_str()))
        .cloned()
        .collect();
    for column in &joined {
        table = table.map_column(column, |cell| Ok::<_, TableError>(join_list(cell)))?;
    }

    if table.has_column(FORMULA) {
        table = table.map_column(FORMULA, normalize_formula)?;
    }
    if table.has_column(SPACEGROUP_SYM) {
        table = table.map_column(SPACEGROUP_SYM, |cell| {
            Ok::<_, TableError>(match cell {
                Cell::Text(symbol) => Cell::Text(normalize_spacegroup(symbol)),
                other => other.clone(),
            })
        })?;
    }
    if table.has_column(ELEMENT_COUNT) {
        table = table.map_column(ELEMENT_COUNT, |cell| {
            Ok::<_, TableError>(match cell {
                Cell::Text(symbols) => Cell::Number((symbols.matches(',').count() + 1) as f64),
                _ => Cell::Missing,
            })
        })?;
    }

    if table.has_column(REFERENCE) {
        let missing: Vec<String> = [JOURNAL_VOLUME, JOURNAL_PAGE_FIRST, JOURNAL_PAGE_LAST]
            .iter()
            .filter(|column| !table.has_column(column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing).into());
        }
        table = with_reference(&table)?;
    }

    Ok(table)
}

/// Run [`keep_columns`], [`rename_columns`] and [`remove_characters`] in
/// order and check the result against the canonical schema.
pub fn normalize(table: &Table, options: &NormalizeOptions) -> Result<Table, NormalizeError> {
    let columns: Option<Vec<&str>> = options
        .columns
        .as_ref()
        .map(|columns| columns.iter().map(String::as_str).collect());
    let renames: Option<Vec<(&str, &str)>> = options.renames.as_ref().map(|renames| {
        renames
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect()
    });

    let kept = keep_columns(table, columns.as_deref())?;
    let renamed = rename_columns(&kept, renames.as_deref())?;
    let normalized = remove_characters(&renamed)?;
    validate_table(&normalized, Stage::Canonical)?;

    info!(
        "Normalized {} rows into {} columns",
        normalized.len(),
        normalized.columns().len()
    );
    Ok(normalized)
}

fn join_list(cell: &Cell) -> Cell {
    match cell {
        Cell::List(values) => Cell::Text(values.join(", ")),
        other => other.clone(),
    }
}

fn normalize_formula(cell: &Cell) -> Result<Cell, NormalizeError> {
    if cell.is_missing() {
        return Ok(Cell::Missing);
    }

    let value: String = cell
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '~')
        .collect();
    let composition =
        Composition::parse(&value).map_err(|reason| NormalizeError::Formula { value, reason })?;
    Ok(Cell::Text(composition.to_string()))
}

/// Strip whitespace, `~` and parentheses, then spell `originchoice2` as ` O2`.
pub fn normalize_spacegroup(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '~' | '(' | ')'))
        .collect::<String>()
        .replace("originchoice2", " O2")
}

fn with_reference(table: &Table) -> Result<Table, TableError> {
    let columns = [REFERENCE, JOURNAL_VOLUME, JOURNAL_PAGE_FIRST, JOURNAL_PAGE_LAST];
    let positions: Vec<usize> = columns
        .iter()
        .map(|column| {
            table
                .column_position(column)
                .ok_or_else(|| TableError::missing(*column))
        })
        .collect::<Result<_, _>>()?;

    let references = table
        .rows()
        .map(|row| {
            let part = |pos: usize| match &row[pos] {
                cell if cell.is_missing() => MISSING_PART.to_string(),
                cell => cell.to_string(),
            };
            Cell::Text(format!(
                "({}) {}, {}-{}",
                part(positions[0]),
                part(positions[1]),
                part(positions[2]),
                part(positions[3])
            ))
        })
        .collect();

    table
        .with_column(REFERENCE, references)?
        .drop_columns(&[JOURNAL_VOLUME, JOURNAL_PAGE_FIRST, JOURNAL_PAGE_LAST])
}
