use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "colorized_output")]
use console::style;

use super::Database;

/// A file that could not be loaded, and why
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    /// Path of the file
    pub path: PathBuf,
    /// Rendered error
    pub reason: String,
}

/// Outcome of ingesting one directory
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Source database of the directory
    pub database: Database,
    /// Number of `.cif` files found
    pub attempted: usize,
    /// Number of files turned into records
    pub loaded: usize,
    /// Files that failed, in processing order
    pub failures: Vec<FileFailure>,
    /// Wall-clock time for the whole directory
    pub elapsed: Duration,
}

impl IngestReport {
    /// Create an empty report for a database
    pub fn new(database: Database) -> Self {
        Self {
            database,
            attempted: 0,
            loaded: 0,
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Percentage of attempted files that failed, rounded down
    pub fn failure_percent(&self) -> usize {
        if self.attempted == 0 {
            return 0;
        }
        self.failures.len() * 100 / self.attempted
    }

    /// Whole minutes elapsed, rounded down
    pub fn elapsed_minutes(&self) -> u64 {
        self.elapsed.as_secs() / 60
    }

    /// Format the final report line with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let percent = format!("{}%", self.failure_percent());
            let percent = if self.failures.is_empty() {
                style(percent).green()
            } else {
                style(percent).yellow()
            };
            format!(
                "{} {} Failed to load, {} minutes taken for entire operation",
                style("Final Report:").bold(),
                percent,
                self.elapsed_minutes()
            )
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Final Report: {}% Failed to load, {} minutes taken for entire operation",
            self.failure_percent(),
            self.elapsed_minutes()
        )
    }
}
