//! Groups resolved candidates by slot, ranks them and picks one winner per slot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    codec::ItemDescriptor,
    metadata::Resolution,
    report::Encounter,
    slots::{Slot, SlotLayout},
};

/// A decoded, resolved profileset result.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub descriptor: ItemDescriptor,
    pub resolution: Resolution,
    /// Simulated mean for this configuration.
    pub mean: f64,
}

/// All candidates for one slot, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGroup {
    pub slot: Slot,
    pub candidates: Vec<Candidate>,
}

impl SlotGroup {
    pub fn top(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

/// The winning upgrade for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub slot: Slot,
    pub item_id: String,
    pub item_level: String,
    pub instance_id: String,
    pub difficulty: String,
    pub enchant_id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub encounter: Option<Encounter>,
    pub mean: f64,
    /// `mean - baseline`.
    pub delta: f64,
}

impl RecommendationEntry {
    fn from_candidate(candidate: &Candidate, baseline: f64) -> Self {
        let d = &candidate.descriptor;
        let r = &candidate.resolution;
        Self {
            slot: d.slot,
            item_id: d.item_id.clone(),
            item_level: d.item_level.clone(),
            instance_id: d.instance_id.clone(),
            difficulty: d.difficulty.clone(),
            enchant_id: d.enchant_id.clone(),
            name: r.name.clone(),
            icon: r.icon.clone(),
            encounter: r.encounter.clone(),
            mean: candidate.mean,
            delta: candidate.mean - baseline,
        }
    }

    pub fn encounter_name(&self) -> Option<&str> {
        self.encounter.as_ref().map(|e| e.name.as_str())
    }
}

/// Groups candidates by slot in first-seen slot order and sorts each group by
/// mean, descending. The sort is stable, so equal means keep input order.
pub fn group_by_slot(candidates: Vec<Candidate>) -> Vec<SlotGroup> {
    let mut groups: Vec<SlotGroup> = Vec::new();
    let mut index: HashMap<Slot, usize> = HashMap::new();

    for candidate in candidates {
        let slot = candidate.descriptor.slot;
        let at = *index.entry(slot).or_insert_with(|| {
            groups.push(SlotGroup {
                slot,
                candidates: Vec::new(),
            });
            groups.len() - 1
        });
        groups[at].candidates.push(candidate);
    }

    for group in &mut groups {
        group.candidates.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    }

    groups
}

/// Picks the eligible winner of every group.
///
/// A slot with a twin in `layout` may not repeat the item id of the twin's
/// current top candidate; its first candidate with a different id wins
/// instead. The twin's own exclusions are not taken into account and the
/// twin never looks back at this slot. Slots left without an eligible
/// candidate are omitted.
pub fn select_winners(
    groups: &[SlotGroup],
    baseline: f64,
    layout: &SlotLayout,
) -> Vec<RecommendationEntry> {
    let top_item_of = |slot: Slot| {
        groups
            .iter()
            .find(|g| g.slot == slot)
            .and_then(SlotGroup::top)
            .map(|c| c.descriptor.item_id.as_str())
    };

    groups
        .iter()
        .filter_map(|group| {
            let taken = layout.twin_of(group.slot).and_then(top_item_of);

            let winner = match taken {
                Some(taken) => group
                    .candidates
                    .iter()
                    .find(|c| c.descriptor.item_id != taken),
                None => group.top(),
            };

            match winner {
                Some(c) => Some(RecommendationEntry::from_candidate(c, baseline)),
                None => {
                    debug!(slot = %group.slot, "no eligible candidate left after twin exclusion");
                    None
                }
            }
        })
        .inspect(|e| trace!(slot = %e.slot, item = %e.item_id, delta = e.delta, "slot winner"))
        .collect()
}
