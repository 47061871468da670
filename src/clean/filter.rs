use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::schema::{FORMULA, SPACEGROUP_SYM, TEMPERATURE};
use crate::table::{Table, TableError};

use super::CleanError;

/// Share of the input rows a column must have filled to survive [`drop_nan`]
const MIN_COLUMN_FILL: f64 = 0.2;

const GROUP_KEYS: [&str; 2] = [FORMULA, SPACEGROUP_SYM];

/// Rows and crystal groups kept and removed by [`remove_few_entries`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    /// Rows kept
    pub kept_entries: usize,
    /// Rows removed
    pub removed_entries: usize,
    /// (FORMULA, SPACEGROUP_SYM) groups kept
    pub kept_crystals: usize,
    /// (FORMULA, SPACEGROUP_SYM) groups removed
    pub removed_crystals: usize,
}

/// Rows kept and removed by [`drop_nan`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RowSummary {
    /// Rows kept
    pub kept_entries: usize,
    /// Rows removed
    pub removed_entries: usize,
}

/// Keep only crystals with at least `num_entries` rows.
///
/// A crystal is a (FORMULA, SPACEGROUP_SYM) group. Rows with a missing key
/// belong to no group and are removed.
pub fn remove_few_entries(
    table: &Table,
    num_entries: usize,
) -> Result<(Table, EntrySummary), CleanError> {
    let groups = table.group_by(&GROUP_KEYS)?;

    let mut keep = vec![false; table.len()];
    let mut kept_crystals = 0;
    for rows in groups.values() {
        if rows.len() >= num_entries {
            kept_crystals += 1;
            for &row in rows {
                keep[row] = true;
            }
        }
    }

    let filtered = table.filter_rows(|row, _| keep[row]);
    let summary = EntrySummary {
        kept_entries: filtered.len(),
        removed_entries: table.len() - filtered.len(),
        kept_crystals,
        removed_crystals: groups.len() - kept_crystals,
    };
    debug!("remove_few_entries(min {}): {:?}", num_entries, summary);

    Ok((filtered, summary))
}

/// Remove incomplete rows and sparse columns.
///
/// 1. Rows without a TEMPERATURE are dropped.
/// 2. Columns with no values left are dropped.
/// 3. Columns with fewer values than 20% of the input row count are dropped.
/// 4. Rows that still have a missing cell are dropped.
pub fn drop_nan(table: &Table) -> Result<(Table, RowSummary), CleanError> {
    let threshold = (table.len() as f64 * MIN_COLUMN_FILL) as usize;

    let pos = table
        .column_position(TEMPERATURE)
        .ok_or_else(|| TableError::missing(TEMPERATURE))?;
    let with_temperature = table.filter_rows(|_, cells| !cells[pos].is_missing());

    let counts = column_counts(&with_temperature);
    let populated = with_temperature.filter_columns(|column| counts[column] > 0);
    let dense = populated.filter_columns(|column| counts[column] >= threshold);
    let complete = dense.filter_rows(|_, cells| cells.iter().all(|cell| !cell.is_missing()));

    let summary = RowSummary {
        kept_entries: complete.len(),
        removed_entries: table.len() - complete.len(),
    };
    debug!(
        "drop_nan: {} columns dropped, {:?}",
        table.columns().len() - complete.columns().len(),
        summary
    );

    Ok((complete, summary))
}

/// Number of crystal groups per group size.
///
/// Maps a row count to how many (FORMULA, SPACEGROUP_SYM) groups have that
/// many rows.
pub fn group_size_histogram(table: &Table) -> Result<BTreeMap<usize, usize>, TableError> {
    let mut histogram = BTreeMap::new();
    for rows in table.group_by(&GROUP_KEYS)?.values() {
        *histogram.entry(rows.len()).or_insert(0) += 1;
    }
    Ok(histogram)
}

fn column_counts(table: &Table) -> BTreeMap<String, usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(pos, column)| {
            let count = table.rows().filter(|cells| !cells[pos].is_missing()).count();
            (column.clone(), count)
        })
        .collect()
}
