// src/core/net.rs

use std::time::Duration;

use tracing::debug;

use crate::config::USER_AGENT;
use crate::error::ScrapeError;

/// Fetch capability used by the runner and the materializer.
/// [`Client`] implements it over real HTTP; tests substitute a canned map.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String, ScrapeError>;
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Blocking HTTP client with a per-request timeout, so one unresponsive
/// image URL cannot hang the run. The run is strictly sequential; one
/// connection at a time is all we need.
pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ScrapeError> {
        debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}

impl Fetch for Client {
    fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        Ok(self.get(url)?.text()?)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        Ok(self.get(url)?.bytes()?.to_vec())
    }
}
