use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::binning::BinnedTable;
use crate::cte::CteTable;
use crate::schema::{FORMULA, SPACEGROUP_SYM};

use super::ExportError;

/// Write CTE fits as CSV to a file. Undefined fits are written as empty fields.
pub fn write_cte_csv<P: AsRef<Path>>(path: P, table: &CteTable) -> Result<(), ExportError> {
    write_cte_csv_to(File::create(path)?, table)
}

/// Write CTE fits as CSV to any writer
pub fn write_cte_csv_to<W: Write>(writer: W, table: &CteTable) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.headers())?;

    for row in table.rows() {
        let mut record = vec![row.key.formula.clone(), row.key.spacegroup.clone()];
        for fit in &row.fits {
            record.push(float_field(fit.cte));
            record.push(float_field(fit.r_squared));
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the binned geometry table as CSV to a file
pub fn write_binned_csv<P: AsRef<Path>>(path: P, binned: &BinnedTable) -> Result<(), ExportError> {
    write_binned_csv_to(File::create(path)?, binned)
}

/// Write the binned geometry table as CSV to any writer
pub fn write_binned_csv_to<W: Write>(writer: W, binned: &BinnedTable) -> Result<(), ExportError> {
    let columns = binned.columns();
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        FORMULA,
        SPACEGROUP_SYM,
        columns.temperature.as_str(),
        columns.a.as_str(),
        columns.b.as_str(),
        columns.c.as_str(),
        columns.volume.as_str(),
    ])?;

    for row in binned.rows() {
        let mut record = vec![
            row.key.formula.clone(),
            row.key.spacegroup.clone(),
            float_field(row.temperature),
        ];
        record.extend(row.quantities().into_iter().map(float_field));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn float_field(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
