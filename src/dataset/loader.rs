use std::path::Path;

use log::debug;

use crate::error::{BenchError, Result};

/// Load one integer column from a headered CSV file.
///
/// The column is located by exact header name. Cells are trimmed and
/// parsed as `i64`; a cell that does not parse aborts the load with the
/// 1-based data row it was found on.
pub fn load_column(path: &Path, column: &str) -> Result<Vec<i64>> {
    let dataset_err = |source: csv::Error| BenchError::Dataset {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(dataset_err)?;

    let idx = reader
        .headers()
        .map_err(dataset_err)?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| BenchError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })?;

    let mut values = Vec::new();
    for (row_no, record) in reader.records().enumerate() {
        let record = record.map_err(dataset_err)?;
        // Readers are not flexible, so every record has the header's width.
        let cell = &record[idx];
        let value = cell.parse::<i64>().map_err(|_| BenchError::InvalidValue {
            row: row_no + 1,
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    debug!("loaded {} values of '{}' from {}", values.len(), column, path.display());
    Ok(values)
}
