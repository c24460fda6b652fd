//! Data models for sounding downloads
//!
//! This module contains the request description handed to the request builder
//! and the tokenised table row passed from the extractor to the materializer.

use crate::constants::COLUMN_COUNT;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Sounding Request
// =============================================================================

/// Parameters of a sounding request
///
/// Every field is optional. Unset fields resolve to "most recent sounding"
/// when the request target is built: the configured default station and
/// region, the current year and month, the last launch time as `from_date`
/// and the current day and hour as `to_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundingRequest {
    /// Numeric station identifier, e.g. "11120"
    pub station_id: Option<String>,

    /// Four-digit year, e.g. "2018"
    pub year: Option<String>,

    /// Two-digit month, e.g. "09"
    pub month: Option<String>,

    /// Start of the period as `DDHH`
    pub from_date: Option<String>,

    /// End of the period as `DDHH`
    pub to_date: Option<String>,

    /// Lowercase region name, e.g. "europe"
    pub region: Option<String>,
}

impl SoundingRequest {
    /// Request for the latest sounding at the default station
    pub fn latest() -> Self {
        Self::default()
    }

    /// Set the station
    pub fn with_station(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    /// Set the year
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Set the month
    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Set the start of the period (`DDHH`)
    pub fn with_from_date(mut self, from_date: impl Into<String>) -> Self {
        self.from_date = Some(from_date.into());
        self
    }

    /// Set the end of the period (`DDHH`)
    pub fn with_to_date(mut self, to_date: impl Into<String>) -> Self {
        self.to_date = Some(to_date.into());
        self
    }

    /// Set both ends of the period
    pub fn with_period(self, from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        self.with_from_date(from_date).with_to_date(to_date)
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

// =============================================================================
// Table Row
// =============================================================================

/// One data line of the sounding table, split into its whitespace-delimited tokens
///
/// A row always carries exactly one token per schema column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    fields: Vec<String>,
}

impl TableRow {
    /// Build a row from tokens, rejecting anything that does not fill the schema
    pub fn new(fields: Vec<String>) -> Result<Self> {
        if fields.len() != COLUMN_COUNT {
            return Err(Error::SchemaMismatch {
                expected: COLUMN_COUNT,
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// Tokenise a table line; `None` when the line does not have one token per column
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        Self::new(fields).ok()
    }

    /// Tokens in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Token for column `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Consume the row into its tokens
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}
