//! Text-unit sources.
//!
//! The builder consumes an ordered collection of paragraph strings; this
//! module produces that collection from a CSV file with a configurable
//! paragraph column. Where the text originally came from (scrape, export,
//! hand-written file) is not this crate's concern.

use std::path::Path;

use tracing::info;

use crate::error::{Result, SourceError};

/// Read the paragraph column out of a CSV file, in row order.
///
/// Cells that are empty after trimming are dropped. A file without the
/// requested column is a [`SourceError::MissingColumn`].
pub fn read_paragraphs(path: impl AsRef<Path>, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path.as_ref()).map_err(SourceError::Csv)?;

    let headers = reader.headers().map_err(SourceError::Csv)?;
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SourceError::MissingColumn(column.to_string()))?;

    let mut paragraphs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(SourceError::Csv)?;
        if let Some(cell) = record.get(index) {
            let cell = cell.trim();
            if !cell.is_empty() {
                paragraphs.push(cell.to_string());
            }
        }
    }

    info!(
        count = paragraphs.len(),
        path = %path.as_ref().display(),
        "loaded text units"
    );
    Ok(paragraphs)
}
