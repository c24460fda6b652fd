//! Delimited artifact holding extracted rows
//!
//! One record per row, fields separated by a single space, quoted only when
//! a field needs it, no header line. The file is overwritten on every write.

use std::path::Path;
use tracing::info;

use crate::app::models::TableRow;
use crate::constants::ARTIFACT_DELIMITER;
use crate::{Error, Result};

/// Write `rows` to `path`, replacing any previous content
pub fn write_artifact(rows: &[TableRow], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(ARTIFACT_DELIMITER)
        .quote_style(csv::QuoteStyle::Necessary)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::artifact(path, e))?;

    for row in rows {
        writer
            .write_record(row.fields())
            .map_err(|e| Error::artifact(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
