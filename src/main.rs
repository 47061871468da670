//! # cifcte
//!
//! Command-line front end for the CTE pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Estimate CTE from PCD and ICSD directories
//! cifcte run --pcd data/pcd --icsd data/icsd -o cte.csv
//!
//! # Keep the binned geometry as Parquet
//! cifcte run --pcd data/pcd --binned binned.parquet
//!
//! # Check what a directory loads
//! cifcte ingest data/icsd --database icsd
//!
//! # Look at a single file
//! cifcte inspect data/pcd/1.cif
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
