//! Orders per-slot winners for presentation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    aggregate::RecommendationEntry,
    errors::{EngineConfigError, EngineError, EngineResult},
    slots::{Slot, SlotLayout},
};

/// Selectable ordering of the recommendation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Largest delta first.
    #[default]
    Dps,
    /// Canonical slot order, main hand to second trinket.
    Slot,
    /// Ascending encounter id; entries without an encounter go last.
    Boss,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Dps, SortMode::Slot, SortMode::Boss];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Dps => "dps",
            SortMode::Slot => "slot",
            SortMode::Boss => "boss",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| EngineError::UnknownSortMode(s.to_owned()))
    }
}

/// Returns `entries` ordered by `mode`.
///
/// `dps` and `boss` break ties by slot position, so the result does not depend
/// on the order `entries` arrive in.
///
/// # Errors
/// [`EngineConfigError::UnlistedSlot`] when sorting by slot and `layout` has no
/// order for one of the entries.
pub fn rank(
    entries: &[RecommendationEntry],
    mode: SortMode,
    layout: &SlotLayout,
) -> EngineResult<Vec<RecommendationEntry>> {
    let mut out = entries.to_vec();

    match mode {
        SortMode::Dps => out.sort_by(|a, b| {
            b.delta
                .total_cmp(&a.delta)
                .then_with(|| slot_position(layout, a.slot).cmp(&slot_position(layout, b.slot)))
        }),
        SortMode::Slot => {
            let mut keyed = out
                .into_iter()
                .map(|e| match layout.order_of(e.slot) {
                    Some(order) => Ok((order, e)),
                    None => Err(EngineConfigError::UnlistedSlot(e.slot.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()?;
            keyed.sort_by_key(|(order, _)| *order);
            out = keyed.into_iter().map(|(_, e)| e).collect();
        }
        SortMode::Boss => out.sort_by_key(|e| {
            let encounter = match &e.encounter {
                Some(enc) => (false, enc.id),
                None => (true, 0),
            };
            (encounter, slot_position(layout, e.slot))
        }),
    }

    Ok(out)
}

/// Tie-break key: layout order first, slots the layout does not list after
/// every listed one.
fn slot_position(layout: &SlotLayout, slot: Slot) -> (u8, Slot) {
    (layout.order_of(slot).unwrap_or(u8::MAX), slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{report::Encounter, slots::SlotSpec};

    fn entry(slot: Slot, item: &str, delta: f64, encounter: Option<u64>) -> RecommendationEntry {
        RecommendationEntry {
            slot,
            item_id: item.to_owned(),
            item_level: "400".to_owned(),
            instance_id: "1".to_owned(),
            difficulty: "heroic".to_owned(),
            enchant_id: "0".to_owned(),
            name: None,
            icon: None,
            encounter: encounter.map(|id| Encounter {
                id,
                name: format!("boss {id}"),
            }),
            mean: 100.0 + delta,
            delta,
        }
    }

    fn sample() -> Vec<RecommendationEntry> {
        vec![
            entry(Slot::Trinket2, "a", 50.0, Some(3)),
            entry(Slot::Head, "b", 900.0, None),
            entry(Slot::MainHand, "c", -20.0, Some(1)),
            entry(Slot::Feet, "d", 900.0, Some(2)),
        ]
    }

    fn items(entries: &[RecommendationEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.item_id.as_str()).collect()
    }

    #[test]
    fn dps_is_descending() {
        let ranked = rank(&sample(), SortMode::Dps, &SlotLayout::canonical()).unwrap();
        assert_eq!(items(&ranked), ["b", "d", "a", "c"]);
    }

    #[test]
    fn slot_follows_canonical_order() {
        let ranked = rank(&sample(), SortMode::Slot, &SlotLayout::canonical()).unwrap();
        assert_eq!(items(&ranked), ["c", "b", "d", "a"]);
    }

    #[test]
    fn boss_puts_missing_encounters_last() {
        let ranked = rank(&sample(), SortMode::Boss, &SlotLayout::canonical()).unwrap();
        assert_eq!(items(&ranked), ["c", "d", "a", "b"]);
    }

    #[test]
    fn resorting_by_dps_matches_fresh_dps_sort() {
        let layout = SlotLayout::canonical();
        let fresh = rank(&sample(), SortMode::Dps, &layout).unwrap();
        let by_slot = rank(&sample(), SortMode::Slot, &layout).unwrap();
        let again = rank(&by_slot, SortMode::Dps, &layout).unwrap();
        assert_eq!(items(&again), items(&fresh));
    }

    #[test]
    fn dps_ties_do_not_depend_on_input_order() {
        let layout = SlotLayout::canonical();
        let winners = vec![
            entry(Slot::Feet, "f", 900.0, Some(4)),
            entry(Slot::Head, "h", 900.0, Some(4)),
        ];

        let fresh = rank(&winners, SortMode::Dps, &layout).unwrap();
        assert_eq!(items(&fresh), ["h", "f"]);

        let by_slot = rank(&winners, SortMode::Slot, &layout).unwrap();
        let again = rank(&by_slot, SortMode::Dps, &layout).unwrap();
        assert_eq!(items(&again), items(&fresh));

        let mut reversed = winners.clone();
        reversed.reverse();
        assert_eq!(items(&rank(&reversed, SortMode::Dps, &layout).unwrap()), ["h", "f"]);
    }

    #[test]
    fn boss_ties_fall_back_to_slot_order() {
        let layout = SlotLayout::canonical();
        let winners = vec![
            entry(Slot::Trinket2, "t", 10.0, Some(2)),
            entry(Slot::Legs, "l", 20.0, None),
            entry(Slot::Neck, "n", 30.0, Some(2)),
            entry(Slot::Chest, "c", 40.0, None),
        ];

        let ranked = rank(&winners, SortMode::Boss, &layout).unwrap();
        assert_eq!(items(&ranked), ["n", "t", "c", "l"]);
    }

    #[test]
    fn slot_sort_fails_on_unlisted_slot() {
        let layout = SlotLayout::from_specs(vec![SlotSpec {
            slot: Slot::Head,
            order: 1,
            label: "Head",
            twin: None,
        }]);
        let err = rank(&sample(), SortMode::Slot, &layout).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config(EngineConfigError::UnlistedSlot(_))
        ));
        // Other modes do not consult the ordering table.
        assert!(rank(&sample(), SortMode::Dps, &layout).is_ok());
    }

    #[test]
    fn parses_known_modes_and_rejects_others() {
        assert_eq!("dps".parse::<SortMode>().unwrap(), SortMode::Dps);
        assert_eq!("slot".parse::<SortMode>().unwrap(), SortMode::Slot);
        assert_eq!("boss".parse::<SortMode>().unwrap(), SortMode::Boss);
        assert!(matches!(
            "DPS".parse::<SortMode>(),
            Err(EngineError::UnknownSortMode(m)) if m == "DPS"
        ));
        assert_eq!(SortMode::default(), SortMode::Dps);
    }
}
