use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::cif::parse_number;
use crate::schema::{GeometryColumns, FORMULA, SPACEGROUP_SYM};
use crate::table::{Cell, Table, TableError};

use super::BinningError;

/// Crystal identity: a formula in one space group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    /// Canonical formula
    pub formula: String,
    /// Canonical space-group symbol
    pub spacegroup: String,
}

impl GroupKey {
    /// Create a key
    pub fn new(formula: impl Into<String>, spacegroup: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            spacegroup: spacegroup.into(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.formula, self.spacegroup)
    }
}

/// Mean geometry of one crystal at one binned temperature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedRow {
    /// Crystal this row belongs to
    pub key: GroupKey,
    /// Binned temperature (K)
    pub temperature: f64,
    /// Mean cell length a (Å)
    pub a: f64,
    /// Mean cell length b (Å)
    pub b: f64,
    /// Mean cell length c (Å)
    pub c: f64,
    /// Mean cell volume (Å³)
    pub volume: f64,
}

impl BinnedRow {
    /// Geometry values in a, b, c, volume order
    pub fn quantities(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.volume]
    }
}

/// Temperature-binned geometry, sorted by (formula, space group, temperature)
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedTable {
    columns: GeometryColumns,
    rows: Vec<BinnedRow>,
}

impl BinnedTable {
    /// Build a table from rows; rows are sorted by key and temperature.
    pub fn new(columns: GeometryColumns, mut rows: Vec<BinnedRow>) -> Self {
        rows.sort_by(|x, y| {
            x.key
                .cmp(&y.key)
                .then_with(|| x.temperature.total_cmp(&y.temperature))
        });
        Self { columns, rows }
    }

    /// Names of the temperature and geometry columns the rows came from
    pub fn columns(&self) -> &GeometryColumns {
        &self.columns
    }

    /// Rows in key order
    pub fn rows(&self) -> &[BinnedRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of each crystal, in key order
    pub fn groups(&self) -> BTreeMap<&GroupKey, Vec<&BinnedRow>> {
        let mut groups: BTreeMap<&GroupKey, Vec<&BinnedRow>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(&row.key).or_default().push(row);
        }
        groups
    }
}

/// Average the geometry columns per (FORMULA, SPACEGROUP_SYM, TEMPERATURE).
///
/// Geometry cells may be numbers or CIF numeric text; missing cells are left
/// out of the mean (a bin with no values averages to NaN). Rows with a
/// missing FORMULA, SPACEGROUP_SYM or temperature are skipped.
pub fn average_temperature(
    table: &Table,
    columns: &GeometryColumns,
) -> Result<BinnedTable, BinningError> {
    if table.is_empty() {
        return Err(BinningError::EmptyTable);
    }

    let require = |name: &str| {
        table
            .column_position(name)
            .ok_or_else(|| TableError::missing(name))
    };
    let formula = require(FORMULA)?;
    let spacegroup = require(SPACEGROUP_SYM)?;
    let temperature = require(columns.temperature.as_str())?;
    let geometry = columns
        .quantities()
        .into_iter()
        .map(|name| require(name).map(|pos| (name, pos)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries: Vec<(GroupKey, f64, [Option<f64>; 4])> = Vec::with_capacity(table.len());
    for cells in table.rows() {
        let (key_f, key_s) = (&cells[formula], &cells[spacegroup]);
        if key_f.is_missing() || key_s.is_missing() {
            continue;
        }
        let Some(t) = float_value(&columns.temperature, &cells[temperature])? else {
            continue;
        };

        let mut values = [None; 4];
        for (slot, (name, pos)) in values.iter_mut().zip(&geometry) {
            *slot = float_value(name, &cells[*pos])?;
        }
        entries.push((GroupKey::new(key_f.to_string(), key_s.to_string()), t, values));
    }

    entries.sort_by(|x, y| x.0.cmp(&y.0).then_with(|| x.1.total_cmp(&y.1)));

    let mut rows: Vec<BinnedRow> = Vec::new();
    let mut start = 0;
    while start < entries.len() {
        let (key, t, _) = &entries[start];
        let end = entries[start..]
            .iter()
            .position(|(k, other, _)| k != key || other.total_cmp(t) != Ordering::Equal)
            .map_or(entries.len(), |offset| start + offset);

        let means = mean_columns(entries[start..end].iter().map(|(_, _, values)| values));
        rows.push(BinnedRow {
            key: key.clone(),
            temperature: *t,
            a: means[0],
            b: means[1],
            c: means[2],
            volume: means[3],
        });
        start = end;
    }

    debug!(
        "Averaged {} rows into {} temperature bins",
        entries.len(),
        rows.len()
    );
    Ok(BinnedTable::new(columns.clone(), rows))
}

fn mean_columns<'a>(values: impl Iterator<Item = &'a [Option<f64>; 4]>) -> [f64; 4] {
    let mut sums = [0.0f64; 4];
    let mut counts = [0usize; 4];
    for row in values {
        for (i, value) in row.iter().enumerate() {
            if let Some(v) = value {
                sums[i] += *v;
                counts[i] += 1;
            }
        }
    }

    let mut means = [f64::NAN; 4];
    for i in 0..4 {
        if counts[i] > 0 {
            means[i] = sums[i] / counts[i] as f64;
        }
    }
    means
}

fn float_value(column: &str, cell: &Cell) -> Result<Option<f64>, BinningError> {
    match cell {
        _ if cell.is_missing() => Ok(None),
        Cell::Number(value) => Ok(Some(*value)),
        Cell::Text(text) => parse_number(text)
            .map(Some)
            .ok_or_else(|| BinningError::invalid(column, text)),
        other => Err(BinningError::invalid(column, &other.to_string())),
    }
}
