//! Command-line argument definitions for the sounding downloader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::SoundingRequest;
use crate::config::SoundingConfig;
use crate::constants::DEFAULT_ARTIFACT_NAME;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the sounding downloader
///
/// Downloads a radiosonde sounding from the University of Wyoming archive
/// and prints its table. Without arguments the latest sounding at
/// Innsbruck-Flughafen (11120) is fetched.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sounding-downloader",
    version,
    about = "Download a radiosonde sounding from the University of Wyoming archive",
    long_about = "Downloads the TEXT:LIST page for one station and period, extracts the sounding \
                  table and prints it. Unset date fields resolve to the most recent sounding."
)]
pub struct Args {
    /// Station identifier (e.g. 11120 for Innsbruck-Flughafen)
    #[arg(short = 's', long = "station", value_name = "ID")]
    pub station_id: Option<String>,

    /// Four-digit year (defaults to the current UTC year)
    #[arg(short = 'y', long = "year", value_name = "YYYY")]
    pub year: Option<String>,

    /// Two-digit month (defaults to the current UTC month)
    #[arg(short = 'm', long = "month", value_name = "MM")]
    pub month: Option<String>,

    /// Start of the period as day and hour
    ///
    /// Defaults to the last sounding: today or yesterday at 00 for the
    /// default station, twelve hours back for other stations.
    #[arg(short = 'f', long = "from", value_name = "DDHH")]
    pub from_date: Option<String>,

    /// End of the period as day and hour (defaults to now)
    #[arg(short = 't', long = "to", value_name = "DDHH")]
    pub to_date: Option<String>,

    /// Region of the station (defaults to europe)
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Write extracted rows to this space-delimited file and read the table back from it
    #[arg(
        short = 'a',
        long = "artifact",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_ARTIFACT_NAME
    )]
    pub artifact: Option<PathBuf>,

    /// Override the sounding service endpoint
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format for the table
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the table"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the downloaded table
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// CSV with a header line
    Csv,
}

impl Args {
    /// Validate the date tokens for shape; station and region pass through unchecked
    pub fn validate(&self) -> Result<()> {
        check_digits("year", self.year.as_deref(), 4)?;
        check_digits("month", self.month.as_deref(), 2)?;
        check_digits("from", self.from_date.as_deref(), 4)?;
        check_digits("to", self.to_date.as_deref(), 4)?;
        Ok(())
    }

    /// Request described by the arguments
    pub fn to_request(&self) -> SoundingRequest {
        SoundingRequest {
            station_id: self.station_id.clone(),
            year: self.year.clone(),
            month: self.month.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            region: self.region.clone(),
        }
    }

    /// Layer the arguments over `config`
    pub fn apply_to(&self, mut config: SoundingConfig) -> SoundingConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(path) = &self.artifact {
            config.artifact_path = Some(path.clone());
        }
        config
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

fn check_digits(name: &str, value: Option<&str>, width: usize) -> Result<()> {
    match value {
        Some(v) if v.len() != width || !v.chars().all(|c| c.is_ascii_digit()) => {
            Err(Error::configuration(format!(
                "--{} must be {} digits, got '{}'",
                name, width, v
            )))
        }
        _ => Ok(()),
    }
}
