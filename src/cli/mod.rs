use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cifcte::ingest::Database;

mod ingest;
mod inspect;
mod run;

mod config;

/// cifcte - Thermal expansion coefficients from CIF unit-cell data
#[derive(Parser)]
#[command(name = "cifcte")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Source database of a directory of CIF files.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DatabaseArg {
    /// Pauling File
    Pcd,
    /// Inorganic Crystal Structure Database
    Icsd,
}

impl From<DatabaseArg> for Database {
    fn from(arg: DatabaseArg) -> Self {
        match arg {
            DatabaseArg::Pcd => Database::Pcd,
            DatabaseArg::Icsd => Database::Icsd,
        }
    }
}

/// Arguments of the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory of PCD `.cif` files
    #[arg(long, value_name = "DIR")]
    pub pcd: Option<PathBuf>,

    /// Directory of ICSD `.cif` files
    #[arg(long, value_name = "DIR")]
    pub icsd: Option<PathBuf>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Discard crystals with fewer rows than this
    #[arg(short = 'm', long)]
    pub min_entries: Option<usize>,

    /// Temperature bin width in K
    #[arg(short = 's', long)]
    pub spacing: Option<f64>,

    /// Fill missing pressures with room pressure instead of room temperature
    #[arg(long)]
    pub fix_pressure: bool,

    /// CTE output CSV path
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the binned geometry table (.csv or .parquet)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub binned: Option<PathBuf>,

    /// Hide the ingestion progress bar
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest CIF directories and estimate thermal expansion per crystal
    Run(RunArgs),

    /// Ingest one directory and report what loaded
    Ingest {
        /// Directory of `.cif` files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Source database of the files
        #[arg(short = 'd', long, value_enum)]
        database: DatabaseArg,

        /// Hide the progress bar
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Print the tags and unit cell of a single CIF file
    Inspect {
        /// Input CIF file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Ingest {
            dir,
            database,
            quiet,
        } => ingest::run(dir, Database::from(database), quiet),
        Commands::Inspect { file } => inspect::run(file),
    }
}
