//! Crate-wide error hierarchy for raidbots-client.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type RaidbotsResult<T> = Result<T, RaidbotsError>;

/// Root error type for the raidbots-client crate.
#[derive(Debug, Error)]
pub enum RaidbotsError {
    /// HTTP / transport failure while fetching a report.
    #[error(transparent)]
    Fetch(#[from] RaidbotsFetchError),

    /// Configuration problems (base URL, timeout).
    #[error(transparent)]
    Config(#[from] RaidbotsConfigError),

    /// Input does not contain a report id.
    #[error("no raidbots report id found in {0:?}")]
    InvalidReportId(String),
}

/// Failures talking to the report host.
#[derive(Debug, Error)]
pub enum RaidbotsFetchError {
    /// Report does not exist or has expired (HTTP 404).
    #[error("report not found")]
    NotFound,

    /// Access denied (HTTP 401/403).
    #[error("access denied: status {0}")]
    Denied(u16),

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Gateway / server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other non-2xx status.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// DNS/connect/reset failures without an HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// Body was not valid JSON.
    #[error("invalid report body: {0}")]
    InvalidBody(String),
}

/// Configuration errors, raised while reading the environment.
#[derive(Debug, Error)]
pub enum RaidbotsConfigError {
    #[error("invalid base url in {var}: {reason}")]
    InvalidBaseUrl {
        var: &'static str,
        reason: &'static str,
    },

    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },
}

impl From<reqwest::Error> for RaidbotsError {
    fn from(e: reqwest::Error) -> Self {
        RaidbotsError::Fetch(RaidbotsFetchError::from(e))
    }
}

impl RaidbotsFetchError {
    /// Classifies a non-2xx status code.
    pub fn from_status(code: u16) -> Self {
        match code {
            401 | 403 => RaidbotsFetchError::Denied(code),
            404 => RaidbotsFetchError::NotFound,
            429 => RaidbotsFetchError::RateLimited,
            500..=599 => RaidbotsFetchError::Server(code),
            _ => RaidbotsFetchError::HttpStatus(code),
        }
    }
}

impl From<reqwest::Error> for RaidbotsFetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return RaidbotsFetchError::Timeout;
        }

        if let Some(status) = e.status() {
            return RaidbotsFetchError::from_status(status.as_u16());
        }

        if e.is_decode() {
            return RaidbotsFetchError::InvalidBody(e.to_string());
        }

        RaidbotsFetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_fetch_errors() {
        assert!(matches!(RaidbotsFetchError::from_status(404), RaidbotsFetchError::NotFound));
        assert!(matches!(RaidbotsFetchError::from_status(403), RaidbotsFetchError::Denied(403)));
        assert!(matches!(RaidbotsFetchError::from_status(429), RaidbotsFetchError::RateLimited));
        assert!(matches!(RaidbotsFetchError::from_status(503), RaidbotsFetchError::Server(503)));
        assert!(matches!(
            RaidbotsFetchError::from_status(418),
            RaidbotsFetchError::HttpStatus(418)
        ));
    }

    #[test]
    fn request_errors_without_status_are_network_errors() {
        // Rejected while building the request; nothing is sent.
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();

        assert!(matches!(
            RaidbotsError::from(err),
            RaidbotsError::Fetch(RaidbotsFetchError::Network(_))
        ));
    }
}
