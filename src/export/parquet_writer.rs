use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, StringBuilder};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

use crate::binning::BinnedTable;
use crate::schema::{create_binned_schema_arc, CIFCTE_FORMAT_VERSION};

use super::ExportError;

/// Parquet writer settings
#[derive(Debug, Clone)]
pub struct ParquetExportConfig {
    /// ZSTD compression level (1-22)
    pub compression_level: i32,
    /// Maximum rows per row group
    pub row_group_size: usize,
    /// Whether to write column chunk statistics
    pub write_statistics: bool,
}

impl Default for ParquetExportConfig {
    fn default() -> Self {
        Self {
            compression_level: 3,
            row_group_size: 100_000,
            write_statistics: true,
        }
    }
}

impl ParquetExportConfig {
    fn to_writer_properties(&self, crystals: usize) -> WriterProperties {
        let compression = Compression::ZSTD(
            ZstdLevel::try_new(self.compression_level).unwrap_or_default(),
        );
        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        let metadata = vec![
            KeyValue {
                key: "cifcte:format_version".to_string(),
                value: Some(CIFCTE_FORMAT_VERSION.to_string()),
            },
            KeyValue {
                key: "cifcte:crystals".to_string(),
                value: Some(crystals.to_string()),
            },
        ];

        WriterProperties::builder()
            .set_compression(compression)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size)
            .set_key_value_metadata(Some(metadata))
            .build()
    }
}

/// Write the binned geometry table to a ZSTD-compressed Parquet file
pub fn write_binned_parquet<P: AsRef<Path>>(path: P, binned: &BinnedTable) -> Result<(), ExportError> {
    write_binned_parquet_to(File::create(path)?, binned, &ParquetExportConfig::default())
}

/// Write the binned geometry table as Parquet to any writer
pub fn write_binned_parquet_to<W: Write + Send>(
    writer: W,
    binned: &BinnedTable,
    config: &ParquetExportConfig,
) -> Result<(), ExportError> {
    let schema = create_binned_schema_arc(binned.columns());
    let props = config.to_writer_properties(binned.groups().len());
    let mut arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

    let rows = binned.rows();
    let mut formula = StringBuilder::with_capacity(rows.len(), rows.len() * 8);
    let mut spacegroup = StringBuilder::with_capacity(rows.len(), rows.len() * 8);
    let mut values: [Float64Builder; 5] =
        std::array::from_fn(|_| Float64Builder::with_capacity(rows.len()));

    for row in rows {
        formula.append_value(&row.key.formula);
        spacegroup.append_value(&row.key.spacegroup);
        values[0].append_value(row.temperature);
        for (builder, value) in values[1..].iter_mut().zip(row.quantities()) {
            builder.append_value(value);
        }
    }

    let mut arrays: Vec<ArrayRef> = vec![Arc::new(formula.finish()), Arc::new(spacegroup.finish())];
    for builder in &mut values {
        arrays.push(Arc::new(builder.finish()));
    }

    let batch = RecordBatch::try_new(schema, arrays)?;
    arrow_writer.write(&batch)?;
    arrow_writer.close()?;
    Ok(())
}
