use serde::Deserialize;
use upgrade_engine::{EngineResult, SortMode};

/// Query string accepted by the report routes.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// `dps` (default), `slot` or `boss`.
    #[serde(default)]
    pub sort: Option<String>,
}

impl ReportQuery {
    /// Parses the requested sort mode; unknown values are rejected, never
    /// replaced by the default.
    pub fn sort_mode(&self) -> EngineResult<SortMode> {
        match self.sort.as_deref() {
            None => Ok(SortMode::default()),
            Some(s) => s.parse(),
        }
    }
}
