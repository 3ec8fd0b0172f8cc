//! Typed model of the droptimizer report document (`data.json`).
//!
//! Only the fields the engine reads are modelled; everything else in the
//! document is ignored by serde.

use serde::{Deserialize, Serialize};

/// `simbot.simType` value that marks an upgrade (droptimizer) report.
pub const DROPTIMIZER_SIM_TYPE: &str = "droptimizer";

/// Root of the report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroptimizerReport {
    pub sim: Sim,
    pub simbot: Simbot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sim {
    pub profilesets: Profilesets,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profilesets {
    #[serde(default)]
    pub results: Vec<ProfilesetResult>,
}

/// One simulated gear configuration.
///
/// `name` carries the encoded item identifier (see [`crate::codec`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesetResult {
    pub name: String,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub raid_dps: MeanStat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeanStat {
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simbot {
    #[serde(default)]
    pub meta: SimbotMeta,
    #[serde(rename = "simType")]
    pub sim_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimbotMeta {
    #[serde(rename = "itemLibrary", default)]
    pub item_library: Vec<LibraryItem>,
}

/// Item metadata supplied by the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: u64,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub instance: ItemInstance,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemInstance {
    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

/// A boss encounter that drops an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: u64,
    pub name: String,
}

impl DroptimizerReport {
    /// Raid-wide mean with no upgrade applied.
    pub fn baseline(&self) -> f64 {
        self.sim.statistics.raid_dps.mean
    }

    pub fn results(&self) -> &[ProfilesetResult] {
        &self.sim.profilesets.results
    }

    pub fn item_library(&self) -> &[LibraryItem] {
        &self.simbot.meta.item_library
    }
}
