//! Fetching droptimizer reports from Raidbots.
//!
//! Parses report ids out of user input and downloads the report document as
//! untyped JSON. Interpreting the document belongs to `upgrade-engine`.

pub mod client;
pub mod config;
mod errors;
pub mod report_id;

pub use client::RaidbotsClient;
pub use config::RaidbotsConfig;
pub use errors::{RaidbotsConfigError, RaidbotsError, RaidbotsFetchError, RaidbotsResult};
pub use report_id::ReportId;

use serde_json::Value;
use tracing::info;

/// Parses `input` into a report id and downloads the report in one go.
pub async fn fetch_report_from_input(
    cfg: RaidbotsConfig,
    input: &str,
) -> RaidbotsResult<(ReportId, Value)> {
    let id = ReportId::parse(input)?;
    info!(report = %id, "loading report");

    let client = RaidbotsClient::from_config(cfg)?;
    let doc = client.fetch_report(&id).await?;
    Ok((id, doc))
}
