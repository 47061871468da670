//! # File Ingestion
//!
//! Loads a directory of `.cif` files from one source database into a
//! [`Table`]. Each file becomes one [`Record`]: its CIF tags (scalars as text,
//! loop columns as lists), the `data_` block name, a `database` tag, and the
//! dictionary form of its [`Structure`]. Structure fields win when a tag
//! collides.
//!
//! A file that cannot be parsed is recorded in the [`IngestReport`] and
//! skipped. Only a directory that yields no records at all is an error.
//!
//! ```rust,no_run
//! use cifcte::ingest::{ingest_directory, Database, IngestOptions};
//!
//! let output = ingest_directory("data/pcd", Database::Pcd, &IngestOptions::default())?;
//! println!("{} records, {}", output.table.len(), output.report);
//! # Ok::<(), cifcte::ingest::IngestError>(())
//! ```

mod error;
pub mod progress;
mod report;


use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cif::{CifDocument, CifValue};
use crate::schema::{RAW_DATABASE, RAW_ID};
use crate::structure::Structure;
use crate::table::{Cell, Record, Table};

pub use error::{IngestError, RecordError};
pub use report::{FileFailure, IngestReport};

/// Source database of a directory of structure files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Database {
    /// Pauling File
    Pcd,
    /// Inorganic Crystal Structure Database
    Icsd,
}

impl Database {
    /// Tag stored in the `database` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Pcd => "PCD",
            Database::Icsd => "ICSD",
        }
    }

    /// Make a block name globally unique by prefixing the database.
    ///
    /// ICSD block names carry a `-ICSD` suffix that is removed first.
    pub fn transform_id(&self, id: &str) -> String {
        match self {
            Database::Pcd => format!("PCD_{id}"),
            Database::Icsd => format!("ICSD_{}", id.replace("-ICSD", "")),
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`ingest_directory`]
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Print the progress bar and the final report to stdout
    pub show_progress: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

/// Table and report produced by [`ingest_directory`]
#[derive(Debug, Clone)]
pub struct IngestOutput {
    /// One row per loaded file, with `data_` already prefixed
    pub table: Table,
    /// Per-file outcome
    pub report: IngestReport,
}

/// Load one CIF file into a raw record.
///
/// The identifier in `data_` is the bare block name; database prefixing
/// happens in [`ingest_directory`].
pub fn read_record<P: AsRef<Path>>(path: P, database: Database) -> Result<Record, RecordError> {
    let doc = CifDocument::from_path(path)?;
    if doc.block_name().is_empty() {
        return Err(RecordError::EmptyBlockName);
    }
    let structure = Structure::from_cif(&doc)?;

    let mut record = Record::new();
    record.insert(RAW_DATABASE, Cell::from(database.as_str()));
    record.insert(RAW_ID, Cell::from(doc.block_name()));
    for (tag, value) in doc.iter() {
        let cell = match value {
            CifValue::Text(text) => Cell::Text(text.clone()),
            CifValue::List(values) => Cell::List(values.clone()),
        };
        record.insert(tag, cell);
    }
    for (key, value) in structure.to_dict() {
        record.insert(key, Cell::Structure(value));
    }

    Ok(record)
}

/// `.cif` files directly inside a directory, sorted by path
pub fn cif_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>, IngestError> {
    let directory = directory.as_ref();
    let read_error = |source| IngestError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let is_cif = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("cif"));
        if is_cif && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every `.cif` file of a directory into one table.
pub fn ingest_directory<P: AsRef<Path>>(
    directory: P,
    database: Database,
    options: &IngestOptions,
) -> Result<IngestOutput, IngestError> {
    let directory = directory.as_ref();
    let started = Instant::now();

    let files = cif_files(directory)?;
    if options.show_progress {
        println!("Loading: {} cifs", database);
    }
    info!("Loading {} {} files from {}", files.len(), database, directory.display());

    let mut report = IngestReport::new(database);
    let mut records = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        if options.show_progress {
            progress::print(i + 1, files.len());
        }
        match read_record(path, database) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.attempted = files.len();
    report.loaded = records.len();
    report.elapsed = started.elapsed();

    if records.is_empty() {
        return Err(IngestError::NoRecords {
            directory: directory.to_path_buf(),
            attempted: report.attempted,
        });
    }

    let table = Table::from_records(records)?.map_column(RAW_ID, |cell| {
        Ok::<_, IngestError>(match cell {
            Cell::Text(id) => Cell::Text(database.transform_id(id)),
            other => other.clone(),
        })
    })?;

    if options.show_progress {
        println!("{}", report.format_colored());
    }
    info!(
        "Loaded {}/{} {} files ({} failed)",
        report.loaded,
        report.attempted,
        database,
        report.failures.len()
    );

    Ok(IngestOutput { table, report })
}
