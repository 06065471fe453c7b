use std::{fs::File, path::Path};

use log::debug;
use ml_core::Dataset;

use crate::{PipelineErr, Result};

/// Reads a labeled dataset from a CSV file.
///
/// The first row is a header. Of each remaining row, the first column is the
/// numeric feature and the last column is the label; columns in between are
/// ignored.
///
/// # Errors
/// Returns `PipelineErr::Io` if the file cannot be opened,
/// `PipelineErr::Csv` for unreadable CSV, and `PipelineErr::MalformedRecord`
/// for rows with too few columns or a non-numeric feature cell. Datasets
/// with more than two distinct labels surface as `PipelineErr::Ml`.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() < 2 {
            return Err(PipelineErr::MalformedRecord {
                line,
                cause: format!("expected at least 2 columns, found {}", record.len()),
            });
        }

        let raw = record.get(0).unwrap_or_default().trim();
        let feature: f32 = raw.parse().map_err(|_| PipelineErr::MalformedRecord {
            line,
            cause: format!("feature column is not numeric: {raw:?}"),
        })?;

        let label = record
            .get(record.len() - 1)
            .unwrap_or_default()
            .trim()
            .to_string();

        rows.push((feature, label));
    }

    debug!("parsed {} rows from {}", rows.len(), path.display());
    Ok(Dataset::from_rows(rows)?)
}
