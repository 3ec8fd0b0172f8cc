//! Best-upgrade-per-slot derivation for droptimizer simulation reports.
//!
//! Pipeline: [`gate`] → [`codec`] → [`metadata`] → [`aggregate`] → [`ranker`].
//! Everything here is synchronous and pure; fetching a report is left to the
//! caller.

pub mod aggregate;
pub mod codec;
pub mod display;
mod errors;
pub mod gate;
pub mod metadata;
pub mod ranker;
pub mod report;
pub mod slots;
pub mod telemetry;

pub use aggregate::RecommendationEntry;
pub use errors::{EngineConfigError, EngineError, EngineResult};
pub use ranker::SortMode;
pub use report::DroptimizerReport;
pub use slots::{Slot, SlotLayout};

use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::{
    aggregate::{Candidate, group_by_slot, select_winners},
    gate::Admission,
    metadata::MetadataLibrary,
};

/// Decodes and resolves every profileset result of `report`.
///
/// Results whose names do not decode are dropped. Returns the candidates and
/// the number of dropped results.
pub fn resolve_candidates(report: &DroptimizerReport) -> (Vec<Candidate>, usize) {
    let library = MetadataLibrary::new(report.item_library());
    let mut skipped = 0;

    let candidates = report
        .results()
        .iter()
        .filter_map(|result| match codec::decode(&result.name) {
            Some(descriptor) => {
                let resolution = library.resolve(&descriptor);
                Some(Candidate {
                    descriptor,
                    resolution,
                    mean: result.mean,
                })
            }
            None => {
                trace!(name = %result.name, "skipping result with undecodable name");
                skipped += 1;
                None
            }
        })
        .collect();

    (candidates, skipped)
}

/// Output of the expensive part of the pipeline: decoded, grouped and
/// deduplicated winners. Cheap to re-rank with any [`SortMode`].
#[derive(Debug, Clone)]
pub struct Aggregation {
    baseline: f64,
    skipped: usize,
    winners: Vec<RecommendationEntry>,
    layout: SlotLayout,
}

impl Aggregation {
    pub fn build(report: &DroptimizerReport) -> Self {
        Self::build_with_layout(report, SlotLayout::canonical())
    }

    #[instrument(skip_all, fields(results = report.results().len()))]
    pub fn build_with_layout(report: &DroptimizerReport, layout: SlotLayout) -> Self {
        let baseline = report.baseline();
        let (candidates, skipped) = resolve_candidates(report);
        let groups = group_by_slot(candidates);
        let winners = select_winners(&groups, baseline, &layout);

        debug!(
            baseline,
            skipped,
            slots = groups.len(),
            winners = winners.len(),
            "report aggregated"
        );

        Self {
            baseline,
            skipped,
            winners,
            layout,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Number of results dropped because their names did not decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Per-slot winners in first-seen slot order.
    pub fn winners(&self) -> &[RecommendationEntry] {
        &self.winners
    }

    /// Winners ordered by `mode`. Does not touch decoding or grouping.
    pub fn ranked(&self, mode: SortMode) -> EngineResult<Vec<RecommendationEntry>> {
        ranker::rank(&self.winners, mode, &self.layout)
    }
}

/// Runs the whole pipeline on an already admitted report.
pub fn process(report: &DroptimizerReport, mode: SortMode) -> EngineResult<Vec<RecommendationEntry>> {
    Aggregation::build(report).ranked(mode)
}

/// What a raw document turned into.
#[derive(Debug, Clone)]
pub enum Outcome {
    Ranked(Vec<RecommendationEntry>),
    /// The document is not a droptimizer report; nothing was processed.
    WrongReportType { sim_type: Option<String> },
}

/// Gates a raw JSON document and, if accepted, runs the pipeline.
pub fn process_document(doc: Value, mode: SortMode) -> EngineResult<Outcome> {
    match gate::admit(doc)? {
        Admission::Accepted(report) => Ok(Outcome::Ranked(process(&report, mode)?)),
        Admission::WrongReportType { sim_type } => Ok(Outcome::WrongReportType { sim_type }),
    }
}
