use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Cell, Record, TableError};

/// Row labels of an indexed table
#[derive(Debug, Clone, PartialEq)]
struct Index {
    name: String,
    labels: Vec<String>,
}

/// Row-major table of [`Cell`]s with named columns and an optional unique index.
///
/// Every transformation returns a new table; the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    index: Option<Index>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: None,
        }
    }

    /// Merge records into one table.
    ///
    /// Columns are the union of all record fields in first-seen order; fields
    /// a record lacks are [`Cell::Missing`]. Zero records is an error.
    pub fn from_records(records: Vec<Record>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::EmptyConcat);
        }

        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for record in &records {
            for (tag, _) in record.iter() {
                if !positions.contains_key(tag) {
                    positions.insert(tag.to_string(), columns.len());
                    columns.push(tag.to_string());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = vec![Cell::Missing; columns.len()];
                for (tag, cell) in record.iter() {
                    row[positions[tag]] = cell.clone();
                }
                row
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            index: None,
        })
    }

    /// Stack tables vertically, aligning columns by name.
    ///
    /// Either none of the tables is indexed, or all are indexed by the same
    /// column; in the latter case the combined labels must stay unique.
    pub fn concat(tables: Vec<Table>) -> Result<Self, TableError> {
        let first_index = match tables.first() {
            Some(table) => table.index.as_ref().map(|index| index.name.clone()),
            None => return Err(TableError::EmptyConcat),
        };
        if tables
            .iter()
            .any(|table| table.index.as_ref().map(|index| &index.name) != first_index.as_ref())
        {
            return Err(TableError::IndexMismatch);
        }

        let mut columns: Vec<String> = Vec::new();
        for table in &tables {
            for column in &table.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for table in tables {
            let mapping: Vec<Option<usize>> = columns
                .iter()
                .map(|column| table.column_position(column))
                .collect();
            for row in &table.rows {
                rows.push(
                    mapping
                        .iter()
                        .map(|pos| pos.map_or(Cell::Missing, |p| row[p].clone()))
                        .collect(),
                );
            }
            if let Some(index) = table.index {
                labels.extend(index.labels);
            }
        }

        let index = match first_index {
            Some(name) => {
                check_unique(&labels)?;
                Some(Index { name, labels })
            }
            None => None,
        };

        Ok(Self {
            columns,
            rows,
            index,
        })
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        if let Some(index) = &mut self.index {
            index.labels.push(self.rows.len().to_string());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names (the index column is not included)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_position(name).is_some()
    }

    /// Position of a column
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Name of the index column, if the table is indexed
    pub fn index_name(&self) -> Option<&str> {
        self.index.as_ref().map(|index| index.name.as_str())
    }

    /// Index labels, one per row
    pub fn index_labels(&self) -> Option<&[String]> {
        self.index.as_ref().map(|index| index.labels.as_slice())
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell at a row and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let pos = self.column_position(column)?;
        self.rows.get(row).map(|cells| &cells[pos])
    }

    /// All cells of a column, in row order
    pub fn column(&self, name: &str) -> Result<Vec<&Cell>, TableError> {
        let pos = self.require(name)?;
        Ok(self.rows.iter().map(|row| &row[pos]).collect())
    }

    /// Number of non-missing cells in a column
    pub fn non_missing_count(&self, name: &str) -> Result<usize, TableError> {
        let pos = self.require(name)?;
        Ok(self.rows.iter().filter(|row| !row[pos].is_missing()).count())
    }

    /// Project onto the given columns, in the given order.
    ///
    /// Every absent column is reported in one error.
    pub fn select(&self, names: &[&str]) -> Result<Table, TableError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing));
        }

        let positions: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_position(name))
            .collect();
        Ok(Table {
            columns: names.iter().map(|name| name.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| positions.iter().map(|&p| row[p].clone()).collect())
                .collect(),
            index: self.index.clone(),
        })
    }

    /// Rename columns (and the index) with an old → new mapping.
    ///
    /// Names not in the mapping are left alone; mapping entries with no
    /// matching column are ignored.
    pub fn rename(&self, mapping: &[(&str, &str)]) -> Table {
        let lookup: HashMap<&str, &str> = mapping.iter().copied().collect();
        let renamed = |name: &str| lookup.get(name).map_or_else(|| name.to_string(), |new| new.to_string());

        let mut table = self.clone();
        table.columns = self.columns.iter().map(|column| renamed(column.as_str())).collect();
        if let Some(index) = &mut table.index {
            index.name = renamed(index.name.as_str());
        }
        table
    }

    /// Move a column into the index. Labels must be present and unique.
    pub fn set_index(&self, name: &str) -> Result<Table, TableError> {
        let pos = self.require(name)?;

        let mut labels = Vec::with_capacity(self.rows.len());
        for (row, cells) in self.rows.iter().enumerate() {
            let cell = &cells[pos];
            if cell.is_missing() {
                return Err(TableError::NullIndex {
                    column: name.to_string(),
                    row,
                });
            }
            labels.push(cell.to_string());
        }
        check_unique(&labels)?;

        let mut columns = self.columns.clone();
        columns.remove(pos);
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(pos);
                row
            })
            .collect();

        Ok(Table {
            columns,
            rows,
            index: Some(Index {
                name: name.to_string(),
                labels,
            }),
        })
    }

    /// Remove columns. Every named column must exist.
    pub fn drop_columns(&self, names: &[&str]) -> Result<Table, TableError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing));
        }

        Ok(self.filter_columns(|column| !names.contains(&column)))
    }

    /// Keep the columns for which `keep` returns true
    pub fn filter_columns(&self, mut keep: impl FnMut(&str) -> bool) -> Table {
        let kept: Vec<usize> = (0..self.columns.len())
            .filter(|&pos| keep(self.columns[pos].as_str()))
            .collect();

        Table {
            columns: kept.iter().map(|&pos| self.columns[pos].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| kept.iter().map(|&pos| row[pos].clone()).collect())
                .collect(),
            index: self.index.clone(),
        }
    }

    /// Keep the rows for which `keep` returns true
    pub fn filter_rows(&self, mut keep: impl FnMut(usize, &[Cell]) -> bool) -> Table {
        let kept: Vec<usize> = (0..self.rows.len())
            .filter(|&row| keep(row, self.rows[row].as_slice()))
            .collect();

        Table {
            columns: self.columns.clone(),
            rows: kept.iter().map(|&row| self.rows[row].clone()).collect(),
            index: self.index.as_ref().map(|index| Index {
                name: index.name.clone(),
                labels: kept.iter().map(|&row| index.labels[row].clone()).collect(),
            }),
        }
    }

    /// Replace every cell of a column through a fallible mapping
    pub fn map_column<E>(
        &self,
        name: &str,
        mut f: impl FnMut(&Cell) -> Result<Cell, E>,
    ) -> Result<Table, E>
    where
        E: From<TableError>,
    {
        let pos = self.require(name)?;
        let mut table = self.clone();
        for row in &mut table.rows {
            row[pos] = f(&row[pos])?;
        }
        Ok(table)
    }

    /// Replace a column's cells, or append the column if it does not exist
    pub fn with_column(&self, name: &str, cells: Vec<Cell>) -> Result<Table, TableError> {
        if cells.len() != self.rows.len() {
            return Err(TableError::RowWidth {
                expected: self.rows.len(),
                found: cells.len(),
            });
        }

        let mut table = self.clone();
        match self.column_position(name) {
            Some(pos) => {
                for (row, cell) in table.rows.iter_mut().zip(cells) {
                    row[pos] = cell;
                }
            }
            None => {
                table.columns.push(name.to_string());
                for (row, cell) in table.rows.iter_mut().zip(cells) {
                    row.push(cell);
                }
            }
        }
        Ok(table)
    }

    /// Group row positions by the rendered values of `keys`.
    ///
    /// Rows with a missing key are left out of every group. Groups come back
    /// sorted by key.
    pub fn group_by(&self, keys: &[&str]) -> Result<BTreeMap<Vec<String>, Vec<usize>>, TableError> {
        let positions = keys
            .iter()
            .map(|key| self.require(key))
            .collect::<Result<Vec<_>, _>>()?;

        let mut groups: BTreeMap<Vec<String>, Vec<usize>> = BTreeMap::new();
        for (row, cells) in self.rows.iter().enumerate() {
            if positions.iter().any(|&p| cells[p].is_missing()) {
                continue;
            }
            let key = positions.iter().map(|&p| cells[p].to_string()).collect();
            groups.entry(key).or_default().push(row);
        }
        Ok(groups)
    }

    fn require(&self, name: &str) -> Result<usize, TableError> {
        self.column_position(name)
            .ok_or_else(|| TableError::missing(name))
    }
}

fn check_unique(labels: &[String]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(TableError::DuplicateIndex(label.clone()));
        }
    }
    Ok(())
}
