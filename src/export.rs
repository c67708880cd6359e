//! Result export
//!
//! Writes comparison tables to durable artifacts. The CSV layout mirrors
//! the rendered table: one header line, then one line per row in table
//! order.

use std::path::{Path, PathBuf};

use crate::core::{CompareError, CompareResult, ComparisonRow, ComparisonTable};

/// Sink for a finished comparison table
pub trait Exporter {
    fn export(&self, table: &ComparisonTable) -> CompareResult<()>;
}

/// CSV file exporter
///
/// An existing file at the target path is replaced, so repeated runs
/// leave a single consistent artifact.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for CsvExporter {
    fn export(&self, table: &ComparisonTable) -> CompareResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| CompareError::export(e.to_string()))?;

        // Header goes out even for an empty table
        writer
            .write_record(["Maturity", "Strike", "MarketPrice", "TheoreticalPrice"])
            .map_err(|e| CompareError::export(e.to_string()))?;

        for row in table {
            writer
                .serialize(row)
                .map_err(|e| CompareError::export(e.to_string()))?;
        }

        writer.flush()?;

        tracing::info!("Exported {} rows to {:?}", table.len(), self.path);
        Ok(())
    }
}

/// Load a previously exported table back from disk.
pub fn read_csv(path: impl AsRef<Path>) -> CompareResult<ComparisonTable> {
    let mut reader =
        csv::Reader::from_path(path.as_ref()).map_err(|e| CompareError::export(e.to_string()))?;

    let mut table = ComparisonTable::new();
    for record in reader.deserialize::<ComparisonRow>() {
        let row = record.map_err(|e| CompareError::export(e.to_string()))?;
        table.push(row);
    }

    Ok(table)
}
