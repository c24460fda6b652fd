//! Sounding Downloader Library
//!
//! A Rust library for downloading radiosonde soundings from the University of
//! Wyoming upper air archive and turning the text table embedded in the page
//! into a Polars `DataFrame`.
//!
//! This library provides tools for:
//! - Building request URLs with "latest sounding" defaults
//! - Fetching the sounding page over HTTP
//! - Detecting the service's "no data" page
//! - Extracting the fixed-width sounding table and dropping incomplete levels
//! - Materializing the rows under the fixed 11-column schema
//!
//! ```no_run
//! use sounding_downloader::{SoundingRequest, download_sounding};
//!
//! # fn example() -> sounding_downloader::Result<()> {
//! let request = SoundingRequest::latest()
//!     .with_year("2018")
//!     .with_month("10")
//!     .with_period("1703", "1704");
//! let table = download_sounding(&request)?;
//! println!("{}", table);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{SoundingRequest, TableRow};
pub use app::services::availability::check_availability;
pub use app::services::fetcher::{HttpLineSource, LineSource, fetch_lines};
pub use app::services::materializer::{SoundingTable, materialize};
pub use app::services::pipeline::{
    Sounding, SoundingClient, download_sounding, download_sounding_with,
};
pub use app::services::request_builder::{
    build_request_target, build_request_target_at, from_day_time,
};
pub use app::services::table_extractor::{
    ExtractStats, Extraction, TableBounds, extract_table, extract_table_with_stats, locate_table,
    write_artifact,
};
pub use config::SoundingConfig;
pub use error::{Error, Result};
