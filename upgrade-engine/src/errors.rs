//! Crate-wide error hierarchy for upgrade-engine.
//!
//! Irregular data inside a report body (malformed candidate names, ids missing
//! from the item library) is absorbed by the pipeline and never reaches this
//! type. Only contract violations surface here.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type EngineResult<T> = Result<T, EngineError>;

/// Root error type for the upgrade-engine crate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The top-level document does not have the droptimizer report shape.
    #[error("malformed report document: {0}")]
    Document(#[from] serde_json::Error),

    /// A caller asked for a sort mode the ranker does not know.
    #[error("unknown sort mode: {0:?} (expected one of: dps, slot, boss)")]
    UnknownSortMode(String),

    /// Slot layout does not cover a slot that reached the ranker.
    #[error(transparent)]
    Config(#[from] EngineConfigError),
}

/// Problems with the slot layout supplied to the aggregator/ranker.
#[derive(Debug, Error)]
pub enum EngineConfigError {
    /// The layout has no ordering entry for this slot.
    #[error("slot {0:?} is not listed in the slot layout")]
    UnlistedSlot(String),
}
