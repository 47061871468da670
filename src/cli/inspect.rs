use anyhow::{Context, Result};
use std::path::PathBuf;

use cifcte::cif::{CifDocument, CifValue};
use cifcte::structure::Structure;

const PREVIEW_VALUES: usize = 4;

/// Display the tags and unit cell of a CIF file
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let doc = CifDocument::from_path(&file).context("Failed to parse CIF file")?;

    println!("CIF File Information");
    println!("====================");
    println!("File: {}", file.display());
    println!("Block: data_{}", doc.block_name());
    println!("Tags: {}", doc.len());
    println!();

    println!("Tags:");
    for (tag, value) in doc.iter() {
        match value {
            CifValue::Text(text) => println!("  {}: {}", tag, text),
            CifValue::List(values) => {
                let preview: Vec<&str> = values
                    .iter()
                    .take(PREVIEW_VALUES)
                    .map(String::as_str)
                    .collect();
                let more = if values.len() > PREVIEW_VALUES { ", ..." } else { "" };
                println!("  {}: [{}{}] ({} values)", tag, preview.join(", "), more, values.len());
            }
        }
    }
    println!();

    match Structure::from_cif(&doc) {
        Ok(structure) => {
            let lattice = &structure.lattice;
            println!("Unit Cell:");
            println!("  a, b, c: {:.4}, {:.4}, {:.4} Å", lattice.a, lattice.b, lattice.c);
            println!(
                "  alpha, beta, gamma: {:.3}, {:.3}, {:.3}°",
                lattice.alpha, lattice.beta, lattice.gamma
            );
            println!("  Volume: {:.4} Å³", lattice.volume);
            println!("  Sites: {}", structure.sites.len());
            println!("  Site formula: {}", structure.site_formula());
        }
        Err(e) => println!("Structure: not available ({})", e),
    }

    Ok(())
}
