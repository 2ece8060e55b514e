use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, Dataset};

/// Write the header plus the selected rows (in the given order) as CSV.
pub fn write_rows<W: Write>(output: W, dataset: &Dataset, rows: &[usize]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(dataset.column_names())
        .context("writing CSV header")?;

    for &row in rows {
        let record: Vec<String> = dataset
            .row(row)
            .into_iter()
            .map(|cell| match cell {
                CellValue::Missing => String::new(),
                other => other.to_string(),
            })
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("writing row {row}"))?;
    }

    writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Convenience wrapper writing to a file path.
pub fn export_rows(path: &Path, dataset: &Dataset, rows: &[usize]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, dataset, rows)
}
