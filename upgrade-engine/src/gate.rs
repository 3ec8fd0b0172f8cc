//! Report gate: rejects anything that is not a droptimizer report before the
//! body is parsed or processed.

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    errors::EngineResult,
    report::{DROPTIMIZER_SIM_TYPE, DroptimizerReport},
};

/// Result of passing a raw document through the gate.
#[derive(Debug, Clone)]
pub enum Admission {
    /// Document is a droptimizer report and matches the expected shape.
    Accepted(Box<DroptimizerReport>),
    /// Document is some other report kind. `sim_type` is whatever the
    /// discriminator held, if anything.
    WrongReportType { sim_type: Option<String> },
}

/// Reads the `simbot.simType` discriminator.
pub fn sim_type(doc: &Value) -> Option<&str> {
    doc.pointer("/simbot/simType").and_then(Value::as_str)
}

/// True when the discriminator equals the droptimizer marker.
pub fn is_acceptable(doc: &Value) -> bool {
    sim_type(doc) == Some(DROPTIMIZER_SIM_TYPE)
}

/// Checks the discriminator, then parses the typed report.
///
/// A wrong report kind is not an error. A droptimizer document whose body does
/// not match the report model is.
pub fn admit(doc: Value) -> EngineResult<Admission> {
    if !is_acceptable(&doc) {
        let sim_type = sim_type(&doc).map(str::to_owned);
        info!(sim_type = ?sim_type, "rejecting report: not a droptimizer report");
        return Ok(Admission::WrongReportType { sim_type });
    }

    let report: DroptimizerReport = serde_json::from_value(doc)?;
    debug!(
        results = report.results().len(),
        library = report.item_library().len(),
        "droptimizer report admitted"
    );
    Ok(Admission::Accepted(Box::new(report)))
}
