//! Sounding table extraction
//!
//! Turns the lines of a sounding page into the rows of its data table.
//!
//! ## Architecture
//!
//! - [`bounds`] - two-marker scan delimiting the data lines
//! - [`artifact`] - optional space-delimited file of the extracted rows
//!
//! Each data line is split on runs of whitespace. Lines that do not yield
//! one token per column are dropped without repair: levels near the surface
//! and high in the profile often leave optional fields blank, and the
//! fixed-width layout does not say which column is missing.

pub mod artifact;
pub mod bounds;

#[cfg(test)]
pub mod tests;

pub use artifact::write_artifact;
pub use bounds::{TableBounds, locate_table};

use tracing::{debug, info};

use crate::Result;
use crate::app::models::TableRow;

/// Counts gathered while extracting a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Lines between the header block and the end marker
    pub data_lines: usize,

    /// Rows kept
    pub rows_kept: usize,

    /// Lines dropped for not filling every column
    pub rows_dropped: usize,
}

/// Extracted rows together with extraction counts
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Complete rows in source order
    pub rows: Vec<TableRow>,

    /// Extraction counts
    pub stats: ExtractStats,
}

/// Extract the complete rows of the sounding table
pub fn extract_table<S: AsRef<str>>(lines: &[S]) -> Result<Vec<TableRow>> {
    extract_table_with_stats(lines).map(|extraction| extraction.rows)
}

/// Extract the complete rows of the sounding table and report what was dropped
pub fn extract_table_with_stats<S: AsRef<str>>(lines: &[S]) -> Result<Extraction> {
    let bounds = locate_table(lines)?;

    let rows: Vec<TableRow> = lines[bounds.start..bounds.end]
        .iter()
        .filter_map(|line| TableRow::parse_line(line.as_ref()))
        .collect();

    let stats = ExtractStats {
        data_lines: bounds.data_line_count(),
        rows_kept: rows.len(),
        rows_dropped: bounds.data_line_count() - rows.len(),
    };

    if stats.rows_dropped > 0 {
        debug!("Dropped {} incomplete table lines", stats.rows_dropped);
    }
    info!(
        "Extracted {} rows from {} table lines",
        stats.rows_kept, stats.data_lines
    );

    Ok(Extraction { rows, stats })
}
