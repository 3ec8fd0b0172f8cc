//! Extraction of report ids from user input.

use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{RaidbotsError, RaidbotsResult};

/// Length of a Raidbots report hash.
pub const REPORT_ID_LEN: usize = 22;

static REPORT_ID_RE: OnceLock<Regex> = OnceLock::new();

fn report_id_re() -> &'static Regex {
    REPORT_ID_RE.get_or_init(|| {
        // Literal pattern; compiling it cannot fail.
        Regex::new(r"(?:https://www\.raidbots\.com/simbot/report/)?(?P<hash>[0-9A-Za-z]{22})")
            .unwrap()
    })
}

/// A 22-character alphanumeric report hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Finds a report id in `input`.
    ///
    /// Accepts a bare hash, a report page URL
    /// (`https://www.raidbots.com/simbot/report/<hash>`) or any text containing
    /// a 22-character alphanumeric run.
    pub fn parse(input: &str) -> RaidbotsResult<Self> {
        report_id_re()
            .captures(input.trim())
            .and_then(|c| c.name("hash"))
            .map(|m| ReportId(m.as_str().to_owned()))
            .ok_or_else(|| RaidbotsError::InvalidReportId(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_url() {
        let id = ReportId::parse("https://www.raidbots.com/simbot/report/jxmyHRqGFghsshiFAeUXn8").unwrap();
        assert_eq!(id.as_str(), "jxmyHRqGFghsshiFAeUXn8");
        assert_eq!(id.as_str().len(), REPORT_ID_LEN);
    }

    #[test]
    fn parses_bare_hash_and_trims() {
        let id = ReportId::parse("  jxmyHRqGFghsshiFAeUXn8\n").unwrap();
        assert_eq!(id.to_string(), "jxmyHRqGFghsshiFAeUXn8");
    }

    #[test]
    fn finds_hash_inside_other_urls() {
        let id = ReportId::parse("https://www.raidbots.com/reports/jxmyHRqGFghsshiFAeUXn8/data.json").unwrap();
        assert_eq!(id.as_str(), "jxmyHRqGFghsshiFAeUXn8");
    }

    #[test]
    fn rejects_short_input() {
        assert!(matches!(
            ReportId::parse("https://www.raidbots.com/simbot/report/abc"),
            Err(RaidbotsError::InvalidReportId(_))
        ));
        assert!(ReportId::parse("").is_err());
    }
}
