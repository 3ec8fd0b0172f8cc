//! Client configuration loaded from environment variables.
//!
//! - `RAIDBOTS_BASE_URL`     = report host (default `https://www.raidbots.com`)
//! - `RAIDBOTS_TIMEOUT_SECS` = request timeout in seconds (default 30)

use std::time::Duration;

use crate::errors::{RaidbotsConfigError, RaidbotsResult};

pub const DEFAULT_BASE_URL: &str = "https://www.raidbots.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RaidbotsConfig {
    /// Host serving `/reports/{id}/data.json`, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RaidbotsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RaidbotsConfig {
    /// Reads the configuration from the environment, falling back to defaults
    /// for unset or empty variables.
    pub fn from_env() -> RaidbotsResult<Self> {
        let mut cfg = Self::default();

        if let Some(url) = non_empty_env("RAIDBOTS_BASE_URL") {
            cfg.base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(secs) = non_empty_env("RAIDBOTS_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| RaidbotsConfigError::InvalidNumber {
                    var: "RAIDBOTS_TIMEOUT_SECS",
                    reason: "expected u64",
                })?;
            cfg.timeout = Duration::from_secs(secs);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RaidbotsResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(RaidbotsConfigError::InvalidBaseUrl {
                var: "RAIDBOTS_BASE_URL",
                reason: "must start with http:// or https://",
            }
            .into());
        }
        if self.timeout.is_zero() {
            return Err(RaidbotsConfigError::InvalidNumber {
                var: "RAIDBOTS_TIMEOUT_SECS",
                reason: "must be > 0",
            }
            .into());
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RaidbotsError;

    #[test]
    fn default_is_valid() {
        assert!(RaidbotsConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_base_and_zero_timeout() {
        let cfg = RaidbotsConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(RaidbotsError::Config(RaidbotsConfigError::InvalidBaseUrl { .. }))
        ));

        let cfg = RaidbotsConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
