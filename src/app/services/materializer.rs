//! Sounding table materialization
//!
//! Assigns the fixed column schema to extracted rows, either straight from
//! memory or from the delimited artifact, and exposes the result as a Polars
//! `DataFrame`.

use polars::prelude::*;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app::models::TableRow;
use crate::constants::{ARTIFACT_DELIMITER, COLUMN_COUNT, COLUMN_NAMES};
use crate::{Error, Result};

/// Sounding profile with one row per level and the columns
/// `pres, hght, temp, dwpt, relh, mixr, drct, speed, thta, thte, thtv`
///
/// Every column is `Float64`; a token that is not a number becomes null.
#[derive(Debug, Clone)]
pub struct SoundingTable {
    frame: DataFrame,
}

/// Materialize extracted rows into a sounding table
pub fn materialize(rows: &[TableRow]) -> Result<SoundingTable> {
    SoundingTable::from_rows(rows)
}

impl SoundingTable {
    /// Build the table from rows, assigning columns by position
    pub fn from_rows(rows: &[TableRow]) -> Result<Self> {
        let columns: Vec<Column> = COLUMN_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values: Vec<Option<f64>> = rows
                    .iter()
                    .map(|row| row.get(index).and_then(parse_value))
                    .collect();
                Column::new((*name).into(), values)
            })
            .collect();

        let frame = DataFrame::new(columns)?;
        debug!("Materialized {} rows", frame.height());
        Ok(Self { frame })
    }

    /// Re-materialize the table from a delimited artifact
    pub fn read_artifact(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::io(format!("Failed to stat {}", path.display()), e))?;
        if metadata.len() == 0 {
            debug!("Artifact {} is empty", path.display());
            return Self::from_rows(&[]);
        }

        let parse_options = CsvParseOptions::default().with_separator(ARTIFACT_DELIMITER);
        let frame = CsvReadOptions::default()
            .with_has_header(false)
            .with_schema(Some(Arc::new(table_schema())))
            .with_ignore_errors(true)
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        info!("Read {} rows from {}", frame.height(), path.display());
        Self::from_frame(frame)
    }

    /// Wrap an existing frame, checking it carries the sounding columns
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        if frame.width() != COLUMN_COUNT {
            return Err(Error::SchemaMismatch {
                expected: COLUMN_COUNT,
                found: frame.width(),
            });
        }

        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        if names != COLUMN_NAMES {
            return Err(Error::malformed_table(format!(
                "unexpected columns: {}",
                names.join(", ")
            )));
        }

        Ok(Self { frame })
    }

    /// Number of levels
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// True when no level survived extraction
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names in schema order
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Values of column `name` from the surface upwards
    pub fn column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let values = self.frame.column(name)?.f64()?.into_iter().collect();
        Ok(values)
    }

    /// Values of level `index` in schema order
    pub fn row(&self, index: usize) -> Option<Vec<Option<f64>>> {
        if index >= self.height() {
            return None;
        }
        COLUMN_NAMES
            .iter()
            .map(|name| {
                self.frame
                    .column(name)
                    .ok()
                    .and_then(|column| column.f64().ok())
                    .map(|values| values.get(index))
            })
            .collect()
    }

    /// Borrow the underlying frame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Take the underlying frame
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Write the table as comma-separated text with a header line
    pub fn write_csv<W: Write>(&mut self, writer: W) -> Result<()> {
        CsvWriter::new(writer)
            .include_header(true)
            .finish(&mut self.frame)?;
        Ok(())
    }
}

impl fmt::Display for SoundingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame)
    }
}

/// Schema shared by in-memory and artifact materialization
fn table_schema() -> Schema {
    Schema::from_iter(
        COLUMN_NAMES
            .iter()
            .map(|name| Field::new((*name).into(), DataType::Float64)),
    )
}

fn parse_value(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}
