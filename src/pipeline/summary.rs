use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::PipelineOutput;

/// Counts describing one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    /// Rows entering normalization
    pub input_rows: usize,
    /// Rows removed for having too many missing values
    pub sparse_rows: usize,
    /// Number of crystals per group size before filtering
    pub group_sizes: BTreeMap<usize, usize>,
    /// Crystals with too few rows
    pub small_crystals: usize,
    /// Rows belonging to those crystals
    pub small_crystal_rows: usize,
    /// Rows of the clean table
    pub clean_rows: usize,
    /// Temperature bins across all crystals
    pub binned_rows: usize,
    /// Crystals with CTE fits
    pub crystals: usize,
    /// Crystals whose volume fit is undefined
    pub undefined_fits: usize,
}

impl PipelineSummary {
    /// Summarize a pipeline output
    pub fn new(output: &PipelineOutput) -> Self {
        let rows = &output.row_summary;
        let entries = &output.entry_summary;
        Self {
            input_rows: rows.kept_entries + rows.removed_entries,
            sparse_rows: rows.removed_entries,
            group_sizes: output.group_sizes.clone(),
            small_crystals: entries.removed_crystals,
            small_crystal_rows: entries.removed_entries,
            clean_rows: output.clean.len(),
            binned_rows: output.binned.len(),
            crystals: output.cte.len(),
            undefined_fits: output
                .cte
                .rows()
                .iter()
                .filter(|row| row.fits[3].cte.is_nan())
                .count(),
        }
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            output.push_str(&format!("{}\n", style("CTE Pipeline Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("====================").cyan()));
            output.push_str(&format!("{}: {}\n", style("Input rows").bold(), self.input_rows));
            output.push_str(&format!(
                "{}: {}\n",
                style("Sparse rows removed").bold(),
                style(self.sparse_rows).yellow()
            ));
            output.push_str(&format!(
                "{}: {} ({} rows)\n",
                style("Small crystals removed").bold(),
                style(self.small_crystals).yellow(),
                self.small_crystal_rows
            ));
            output.push_str(&format!("{}: {}\n", style("Clean rows").bold(), self.clean_rows));
            output.push_str(&format!(
                "{}: {}\n",
                style("Temperature bins").bold(),
                self.binned_rows
            ));
            output.push_str(&format!(
                "{}: {} ({} undefined)\n",
                style("Crystals fitted").bold(),
                style(self.crystals).green(),
                style(self.undefined_fits).red()
            ));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CTE Pipeline Summary")?;
        writeln!(f, "====================")?;
        writeln!(f, "Input rows: {}", self.input_rows)?;
        writeln!(f, "Sparse rows removed: {}", self.sparse_rows)?;
        writeln!(
            f,
            "Small crystals removed: {} ({} rows)",
            self.small_crystals, self.small_crystal_rows
        )?;
        writeln!(f, "Clean rows: {}", self.clean_rows)?;
        writeln!(f, "Temperature bins: {}", self.binned_rows)?;
        writeln!(
            f,
            "Crystals fitted: {} ({} undefined)",
            self.crystals, self.undefined_fits
        )
    }
}
