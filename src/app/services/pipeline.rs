//! End-to-end sounding download
//!
//! Request builder, fetcher, availability check, table extractor and
//! materializer run in that order for a single request. Nothing is shared
//! between runs apart from the artifact file, when one is configured.

use chrono::Utc;
use tracing::{info, instrument};

use crate::app::models::SoundingRequest;
use crate::app::services::availability::check_availability;
use crate::app::services::fetcher::{HttpLineSource, LineSource};
use crate::app::services::materializer::{SoundingTable, materialize};
use crate::app::services::request_builder::build_request_target_at;
use crate::app::services::table_extractor::{extract_table_with_stats, write_artifact};
use crate::config::SoundingConfig;
use crate::{Error, Result};

/// Runs the download pipeline against a [`LineSource`]
#[derive(Debug, Clone)]
pub struct SoundingClient<S: LineSource = HttpLineSource> {
    config: SoundingConfig,
    source: S,
}

impl SoundingClient<HttpLineSource> {
    /// Client fetching over HTTP with the given configuration
    pub fn new(config: SoundingConfig) -> Result<Self> {
        config.validate()?;
        let source = HttpLineSource::from_config(&config)?;
        Ok(Self { config, source })
    }
}

impl<S: LineSource> SoundingClient<S> {
    /// Client reading lines from `source`
    pub fn with_source(config: SoundingConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Active configuration
    pub fn config(&self) -> &SoundingConfig {
        &self.config
    }

    /// Request URL for `request` at the current UTC time
    pub fn request_target(&self, request: &SoundingRequest) -> String {
        build_request_target_at(request, &self.config, Utc::now().naive_utc())
    }

    /// Download and parse the sounding described by `request`
    pub fn download(&self, request: &SoundingRequest) -> Result<Sounding> {
        let url = self.request_target(request);
        self.download_url(&url)
    }

    /// Download and parse the sounding page at `url`
    #[instrument(level = "info", skip(self))]
    pub fn download_url(&self, url: &str) -> Result<Sounding> {
        let lines = self.source.fetch_lines(url)?;

        if !check_availability(&lines) {
            return Err(Error::sounding_unavailable(url));
        }

        let extraction = extract_table_with_stats(&lines)?;

        let table = match &self.config.artifact_path {
            Some(path) => {
                write_artifact(&extraction.rows, path)?;
                SoundingTable::read_artifact(path)?
            }
            None => materialize(&extraction.rows)?,
        };

        info!(
            "Sounding ready: {} levels ({} incomplete lines dropped)",
            table.height(),
            extraction.stats.rows_dropped
        );

        Ok(Sounding {
            url: url.to_string(),
            table,
            rows_dropped: extraction.stats.rows_dropped,
        })
    }
}

/// Parsed sounding together with where it came from
#[derive(Debug, Clone)]
pub struct Sounding {
    /// Request URL the page was fetched from
    pub url: String,

    /// Parsed profile
    pub table: SoundingTable,

    /// Table lines dropped for not filling every column
    pub rows_dropped: usize,
}

/// Download a sounding with the default configuration and print its source URL
pub fn download_sounding(request: &SoundingRequest) -> Result<SoundingTable> {
    download_sounding_with(request, SoundingConfig::from_env())
}

/// Download a sounding with `config` and print its source URL
pub fn download_sounding_with(
    request: &SoundingRequest,
    config: SoundingConfig,
) -> Result<SoundingTable> {
    let client = SoundingClient::new(config)?;
    let sounding = client.download(request)?;
    println!("On this homepage you can find the data:\n{}", sounding.url);
    Ok(sounding.table)
}
