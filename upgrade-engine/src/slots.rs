//! Equipment slots and the layout tables the aggregator and ranker consult.
//!
//! The canonical layout lists all 16 slots with their display order, label and
//! (for the second member of a pair) the twin slot whose top pick must not be
//! recommended again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 16 canonical equipment locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    MainHand,
    OffHand,
    Head,
    Neck,
    Shoulder,
    Back,
    Chest,
    Wrist,
    Hands,
    Waist,
    Legs,
    Feet,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
}

impl Slot {
    /// Every slot, in canonical order.
    pub const ALL: [Slot; 16] = [
        Slot::MainHand,
        Slot::OffHand,
        Slot::Head,
        Slot::Neck,
        Slot::Shoulder,
        Slot::Back,
        Slot::Chest,
        Slot::Wrist,
        Slot::Hands,
        Slot::Waist,
        Slot::Legs,
        Slot::Feet,
        Slot::Finger1,
        Slot::Finger2,
        Slot::Trinket1,
        Slot::Trinket2,
    ];

    /// Key used by the report producer, e.g. `main_hand` or `trinket2`.
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::MainHand => "main_hand",
            Slot::OffHand => "off_hand",
            Slot::Head => "head",
            Slot::Neck => "neck",
            Slot::Shoulder => "shoulder",
            Slot::Back => "back",
            Slot::Chest => "chest",
            Slot::Wrist => "wrist",
            Slot::Hands => "hands",
            Slot::Waist => "waist",
            Slot::Legs => "legs",
            Slot::Feet => "feet",
            Slot::Finger1 => "finger1",
            Slot::Finger2 => "finger2",
            Slot::Trinket1 => "trinket1",
            Slot::Trinket2 => "trinket2",
        }
    }

    /// Parses a producer key. Returns `None` for anything outside the canonical set.
    pub fn from_key(key: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| s.as_str() == key)
    }

    /// Human-readable label from the canonical layout ("Main Hand", "Trinket 2").
    pub fn label(self) -> &'static str {
        CANONICAL
            .iter()
            .find(|spec| spec.slot == self)
            .map(|spec| spec.label)
            .unwrap_or_else(|| self.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout row for a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub slot: Slot,
    /// Position used by the `slot` sort mode (ascending).
    pub order: u8,
    pub label: &'static str,
    /// First member of the pair this slot must not duplicate.
    pub twin: Option<Slot>,
}

const fn spec(slot: Slot, order: u8, label: &'static str, twin: Option<Slot>) -> SlotSpec {
    SlotSpec {
        slot,
        order,
        label,
        twin,
    }
}

const CANONICAL: [SlotSpec; 16] = [
    spec(Slot::MainHand, 1, "Main Hand", None),
    spec(Slot::OffHand, 2, "Off Hand", Some(Slot::MainHand)),
    spec(Slot::Head, 3, "Head", None),
    spec(Slot::Neck, 4, "Neck", None),
    spec(Slot::Shoulder, 5, "Shoulder", None),
    spec(Slot::Back, 6, "Back", None),
    spec(Slot::Chest, 7, "Chest", None),
    spec(Slot::Wrist, 8, "Wrist", None),
    spec(Slot::Hands, 9, "Hands", None),
    spec(Slot::Waist, 10, "Waist", None),
    spec(Slot::Legs, 11, "Legs", None),
    spec(Slot::Feet, 12, "Feet", None),
    spec(Slot::Finger1, 13, "Finger 1", None),
    spec(Slot::Finger2, 14, "Finger 2", Some(Slot::Finger1)),
    spec(Slot::Trinket1, 15, "Trinket 1", None),
    spec(Slot::Trinket2, 16, "Trinket 2", Some(Slot::Trinket1)),
];

/// Immutable slot configuration: ordering table and twin map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    specs: Vec<SlotSpec>,
}

impl SlotLayout {
    /// The 16-slot layout used by droptimizer reports.
    pub fn canonical() -> Self {
        Self {
            specs: CANONICAL.to_vec(),
        }
    }

    /// Builds a custom layout. Slots missing from `specs` have no order and no twin.
    pub fn from_specs(specs: Vec<SlotSpec>) -> Self {
        Self { specs }
    }

    fn find(&self, slot: Slot) -> Option<&SlotSpec> {
        self.specs.iter().find(|s| s.slot == slot)
    }

    pub fn order_of(&self, slot: Slot) -> Option<u8> {
        self.find(slot).map(|s| s.order)
    }

    /// Twin slot whose top candidate `slot` must not repeat.
    pub fn twin_of(&self, slot: Slot) -> Option<Slot> {
        self.find(slot).and_then(|s| s.twin)
    }
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self::canonical()
    }
}
