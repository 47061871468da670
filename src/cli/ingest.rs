use anyhow::{Context, Result};
use std::path::PathBuf;

use cifcte::ingest::{ingest_directory, Database, IngestOptions};

/// Ingest one directory and print per-column coverage
pub fn run(dir: PathBuf, database: Database, quiet: bool) -> Result<()> {
    let options = IngestOptions {
        show_progress: !quiet,
    };
    let output = ingest_directory(&dir, database, &options)
        .with_context(|| format!("Failed to ingest {}", dir.display()))?;
    let table = &output.table;

    if quiet {
        println!("{}", output.report);
    }

    println!();
    println!("Records: {}", table.len());
    println!("Columns: {}", table.columns().len());

    let mut coverage = Vec::with_capacity(table.columns().len());
    for column in table.columns() {
        coverage.push((table.non_missing_count(column)?, column.as_str()));
    }
    coverage.sort_by(|x, y| y.0.cmp(&x.0).then_with(|| x.1.cmp(y.1)));

    println!();
    println!("Column Coverage:");
    for (count, column) in coverage {
        println!("  {:>6}  {}", count, column);
    }

    if !output.report.failures.is_empty() {
        println!();
        println!("Failures:");
        for failure in &output.report.failures {
            println!("  {}: {}", failure.path.display(), failure.reason);
        }
    }

    Ok(())
}
