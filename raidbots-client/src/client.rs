//! HTTP client for Raidbots report documents.
//!
//! Endpoints used:
//!   * GET {base}/reports/{id}/data.json
//!   * report page: {base}/simbot/report/{id}

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::RaidbotsConfig,
    errors::{RaidbotsFetchError, RaidbotsResult},
    report_id::ReportId,
};

const USER_AGENT: &str = "droptimizer-engine/0.1";

/// Thin wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RaidbotsClient {
    http: Client,
    base_url: String,
}

impl RaidbotsClient {
    /// Builds the HTTP client with the configured timeout and a stable user agent.
    pub fn from_config(cfg: RaidbotsConfig) -> RaidbotsResult<Self> {
        cfg.validate()?;
        debug!(base_url = %cfg.base_url, timeout = ?cfg.timeout, "initializing raidbots client");

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url,
        })
    }

    pub fn report_data_url(&self, id: &ReportId) -> String {
        format!("{}/reports/{}/data.json", self.base_url, id)
    }

    pub fn report_page_url(&self, id: &ReportId) -> String {
        format!("{}/simbot/report/{}", self.base_url, id)
    }

    /// Downloads the raw report document.
    ///
    /// The body is returned untyped; checking the report kind is the engine's
    /// job.
    pub async fn fetch_report(&self, id: &ReportId) -> RaidbotsResult<Value> {
        let url = self.report_data_url(id);
        debug!(%url, "fetching report");

        let body = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let doc: Value = serde_json::from_slice(&body)
            .map_err(|e| RaidbotsFetchError::InvalidBody(e.to_string()))?;

        info!(report = %id, bytes = body.len(), "report fetched");
        Ok(doc)
    }
}
