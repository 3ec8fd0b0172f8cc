use raidbots_client::{RaidbotsClient, RaidbotsConfig};
use tracing::info;

use crate::{core::report_cache::ReportCache, error_handler::AppError};

const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Droptimizer `data.json` files are routinely several MB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared state for all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Client used to download report documents.
    pub raidbots: RaidbotsClient,
    /// Aggregations of recently loaded reports.
    pub reports: ReportCache,
    /// Upper bound on uploaded report bodies.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// - `RAIDBOTS_BASE_URL`, `RAIDBOTS_TIMEOUT_SECS` (see `raidbots-client`)
    /// - `REPORT_CACHE_CAPACITY` (default 64)
    /// - `MAX_REPORT_BODY_BYTES` (default 32 MiB)
    pub fn from_env() -> Result<Self, AppError> {
        let raidbots_cfg = RaidbotsConfig::from_env()?;
        let capacity = positive_from_env("REPORT_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?;
        let max_body_bytes = positive_from_env("MAX_REPORT_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        info!(
            base_url = %raidbots_cfg.base_url,
            cache_capacity = capacity,
            max_body_bytes,
            "application state loaded"
        );

        Ok(Self::new(RaidbotsClient::from_config(raidbots_cfg)?, capacity)
            .with_max_body_bytes(max_body_bytes))
    }

    pub fn new(raidbots: RaidbotsClient, cache_capacity: usize) -> Self {
        Self {
            raidbots,
            reports: ReportCache::new(cache_capacity),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

fn positive_from_env(var: &'static str, default: usize) -> Result<usize, AppError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => parse_positive(var, &v),
        _ => Ok(default),
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Config(format!("{var} must be a positive integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_parse_and_others_fail() {
        assert_eq!(parse_positive("MAX_REPORT_BODY_BYTES", " 4096 ").unwrap(), 4096);
        assert!(matches!(
            parse_positive("MAX_REPORT_BODY_BYTES", "0"),
            Err(AppError::Config(msg)) if msg.starts_with("MAX_REPORT_BODY_BYTES")
        ));
        assert!(parse_positive("REPORT_CACHE_CAPACITY", "many").is_err());
    }
}
