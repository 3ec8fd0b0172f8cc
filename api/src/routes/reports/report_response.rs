use serde::Serialize;
use upgrade_engine::{Aggregation, EngineResult, SortMode, display::EntryView};

pub const WRONG_REPORT_TYPE_MESSAGE: &str = "Not a droptimizer report";

/// Response payload for the report routes.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportView {
    /// Per-slot winners in the requested order.
    Ranked {
        #[serde(skip_serializing_if = "Option::is_none")]
        report_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        report_url: Option<String>,
        sort: SortMode,
        baseline: f64,
        /// Results ignored because their names did not decode.
        skipped: usize,
        recommendations: Vec<EntryView>,
    },
    /// The document is some other report kind; nothing was processed.
    WrongReportType {
        sim_type: Option<String>,
        message: &'static str,
    },
}

impl ReportView {
    pub fn ranked(
        report: Option<(String, String)>,
        sort: SortMode,
        aggregation: &Aggregation,
    ) -> EngineResult<Self> {
        let recommendations = aggregation
            .ranked(sort)?
            .iter()
            .map(EntryView::from)
            .collect();
        let (report_id, report_url) = report.unzip();

        Ok(ReportView::Ranked {
            report_id,
            report_url,
            sort,
            baseline: aggregation.baseline(),
            skipped: aggregation.skipped(),
            recommendations,
        })
    }

    pub fn wrong_report_type(sim_type: Option<String>) -> Self {
        ReportView::WrongReportType {
            sim_type,
            message: WRONG_REPORT_TYPE_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use upgrade_engine::DroptimizerReport;

    #[test]
    fn ranked_view_serializes_with_status_tag() {
        let report: DroptimizerReport = serde_json::from_value(json!({
            "sim": {
                "profilesets": { "results": [
                    { "name": "0/0/0/1001/400/0/head", "mean": 101500.0 },
                    { "name": "garbage", "mean": 1.0 }
                ] },
                "statistics": { "raid_dps": { "mean": 100000.0 } }
            },
            "simbot": { "meta": { "itemLibrary": [] }, "simType": "droptimizer" }
        }))
        .unwrap();

        let view = ReportView::ranked(None, SortMode::Slot, &Aggregation::build(&report)).unwrap();
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["status"], "ranked");
        assert_eq!(value["sort"], "slot");
        assert_eq!(value["skipped"], 1);
        assert!(value.get("report_id").is_none());
        assert_eq!(value["recommendations"][0]["slot"], "head");
        assert_eq!(value["recommendations"][0]["delta_text"], "+1,500 dps");
    }

    #[test]
    fn wrong_type_view_carries_message() {
        let value = serde_json::to_value(ReportView::wrong_report_type(Some("quick".into()))).unwrap();
        assert_eq!(value["status"], "wrong_report_type");
        assert_eq!(value["sim_type"], "quick");
        assert_eq!(value["message"], WRONG_REPORT_TYPE_MESSAGE);
    }
}
