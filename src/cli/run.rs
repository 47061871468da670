use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

use cifcte::binning::BinnedTable;
use cifcte::clean::PressureFill;
use cifcte::export::{
    write_binned_csv, write_binned_parquet_to, write_cte_csv, ParquetExportConfig,
};
use cifcte::ingest::Database;
use cifcte::pipeline::{Pipeline, Source};

use super::config::Config;
use super::RunArgs;

const DEFAULT_CTE_OUTPUT: &str = "cte.csv";

/// Ingest the given directories and write CTE results
pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let mut pipeline_config = config.pipeline;
    if let Some(min_entries) = args.min_entries {
        pipeline_config.min_entries = min_entries;
    }
    if let Some(spacing) = args.spacing {
        pipeline_config.bin_spacing = spacing;
    }
    if args.fix_pressure {
        pipeline_config.pressure_fill = PressureFill::RoomPressure;
    }
    if args.quiet {
        pipeline_config.show_progress = false;
    }

    let mut sources = Vec::new();
    if let Some(dir) = args.pcd {
        sources.push(Source::new(dir, Database::Pcd));
    }
    if let Some(dir) = args.icsd {
        sources.push(Source::new(dir, Database::Icsd));
    }
    if sources.is_empty() {
        anyhow::bail!("At least one of --pcd or --icsd is required");
    }

    let cte_path = args
        .output
        .or(config.output.cte)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CTE_OUTPUT));
    let binned_path = args.binned.or(config.output.binned);

    info!("cifcte - CTE from CIF unit cells");
    info!("================================");
    for source in &sources {
        info!("{}: {}", source.database, source.directory.display());
    }
    info!("Minimum entries: {}", pipeline_config.min_entries);
    info!("Bin spacing: {} K", pipeline_config.bin_spacing);

    let output = Pipeline::new(pipeline_config)
        .run(&sources)
        .context("Pipeline failed")?;

    let summary = output.summary();
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", summary.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", summary);
    }

    write_cte_csv(&cte_path, &output.cte)
        .with_context(|| format!("Failed to write {}", cte_path.display()))?;
    println!("CTE results: {}", cte_path.display());

    if let Some(path) = binned_path {
        let mut export = ParquetExportConfig::default();
        if let Some(level) = config.output.compression_level {
            export.compression_level = level;
        }
        write_binned(&path, &output.binned, &export)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Binned geometry: {}", path.display());
    }

    Ok(())
}

fn write_binned(path: &Path, binned: &BinnedTable, export: &ParquetExportConfig) -> Result<()> {
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        write_binned_parquet_to(File::create(path)?, binned, export)?;
    } else {
        write_binned_csv(path, binned)?;
    }
    Ok(())
}
