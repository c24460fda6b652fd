//! Blocking retrieval of the sounding page
//!
//! The page is fetched once, decoded as text and split into lines. There is
//! no retry: transport and status errors end the run.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::SoundingConfig;
use crate::{Error, Result};

/// Source of response lines for a request target
pub trait LineSource {
    /// Fetch `url` and return the body split into lines
    fn fetch_lines(&self, url: &str) -> Result<Vec<String>>;
}

/// [`LineSource`] backed by a blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpLineSource {
    client: Client,
}

impl HttpLineSource {
    /// Wrap an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client carrying the configured user agent
    pub fn from_config(config: &SoundingConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::http(config.base_url.clone(), e))?;
        Ok(Self::new(client))
    }
}

impl LineSource for HttpLineSource {
    fn fetch_lines(&self, url: &str) -> Result<Vec<String>> {
        fetch_lines(&self.client, url)
    }
}

/// GET `url` and split the decoded body into lines
pub fn fetch_lines(client: &Client, url: &str) -> Result<Vec<String>> {
    info!("Fetching sounding page: {}", url);

    let body = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| Error::http(url, e))?;

    let lines = split_lines(&body);
    debug!("Received {} bytes in {} lines", body.len(), lines.len());
    Ok(lines)
}

/// Split a response body on `\n`, dropping the `\r` of CRLF endings
///
/// A trailing newline yields a final empty line.
pub fn split_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
