//! Configuration management and validation.
//!
//! Holds the remote endpoint, the fallback station and region used when a
//! request leaves them unset, and where (if anywhere) extracted rows are
//! persisted between extraction and materialization.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_REGION, DEFAULT_STATION_ID, DEFAULT_USER_AGENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding [`SoundingConfig::base_url`]
pub const ENV_BASE_URL: &str = "SOUNDING_BASE_URL";

/// Environment variable enabling the artifact at the given path
pub const ENV_ARTIFACT: &str = "SOUNDING_ARTIFACT";

/// Global configuration for sounding downloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundingConfig {
    /// Sounding CGI endpoint, without query string
    pub base_url: String,

    /// Station used when a request has no station id
    pub default_station_id: String,

    /// Region used when a request has no region
    pub default_region: String,

    /// Delimited file the extracted rows are written to and re-read from.
    /// `None` keeps the handoff in memory.
    pub artifact_path: Option<PathBuf>,

    /// User agent header for outbound requests
    pub user_agent: String,
}

impl Default for SoundingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_station_id: DEFAULT_STATION_ID.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            artifact_path: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SoundingConfig {
    /// Defaults overlaid with `SOUNDING_BASE_URL` and `SOUNDING_ARTIFACT`
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides base url: {}", ENV_BASE_URL, url);
            self.base_url = url;
        }
        if let Some(path) = lookup(ENV_ARTIFACT).filter(|v| !v.trim().is_empty()) {
            debug!("{} enables artifact at {}", ENV_ARTIFACT, path);
            self.artifact_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Use a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Change the fallback station
    pub fn with_default_station(mut self, station_id: impl Into<String>) -> Self {
        self.default_station_id = station_id.into();
        self
    }

    /// Change the fallback region
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Persist extracted rows to `path` before materializing
    pub fn with_artifact_path(mut self, path: impl AsRef<Path>) -> Self {
        self.artifact_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the extractor to materializer handoff in memory
    pub fn without_artifact(mut self) -> Self {
        self.artifact_path = None;
        self
    }

    /// Check the configuration for values that cannot produce a request
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(Error::configuration("Base URL must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::configuration(format!(
                "Base URL must use http or https: {}",
                base
            )));
        }
        if base.contains('?') {
            return Err(Error::configuration(format!(
                "Base URL must not carry a query string: {}",
                base
            )));
        }
        if self.default_station_id.trim().is_empty() {
            return Err(Error::configuration("Default station id must not be empty"));
        }
        if self.default_region.trim().is_empty() {
            return Err(Error::configuration("Default region must not be empty"));
        }
        if let Some(path) = &self.artifact_path {
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Artifact path is a directory: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
