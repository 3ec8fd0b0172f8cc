//! Presentation helpers shared by the HTTP and terminal front-ends.

use serde::Serialize;

use crate::{aggregate::RecommendationEntry, slots::Slot};

const WOWHEAD_ITEM_URL: &str = "https://www.wowhead.com/item=";
const ICON_URL_PREFIX: &str = "https://wow.zamimg.com/images/wow/icons/medium/";

/// Render-ready form of a [`RecommendationEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub slot: Slot,
    pub slot_label: &'static str,
    pub item_id: String,
    pub item_level: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub item_url: String,
    pub icon_url: Option<String>,
    pub delta: f64,
    pub delta_text: String,
    /// True when the "upgrade" does not increase output.
    pub is_loss: bool,
    pub encounter: Option<String>,
}

impl From<&RecommendationEntry> for EntryView {
    fn from(e: &RecommendationEntry) -> Self {
        Self {
            slot: e.slot,
            slot_label: e.slot.label(),
            item_id: e.item_id.clone(),
            item_level: e.item_level.clone(),
            name: e.name.clone(),
            icon: e.icon.clone(),
            item_url: item_url(&e.item_id),
            icon_url: e.icon.as_deref().map(icon_url),
            delta: e.delta,
            delta_text: format_delta(e.delta),
            is_loss: e.delta <= 0.0,
            encounter: e.encounter_name().map(str::to_owned),
        }
    }
}

pub fn item_url(item_id: &str) -> String {
    format!("{WOWHEAD_ITEM_URL}{item_id}")
}

pub fn icon_url(icon: &str) -> String {
    format!("{ICON_URL_PREFIX}{icon}.jpg")
}

/// Formats a delta as whole units with thousands separators, e.g. `+1,500 dps`.
///
/// Only strictly positive deltas get a `+`.
pub fn format_delta(delta: f64) -> String {
    let rounded = delta.round();
    let sign = if delta > 0.0 {
        "+"
    } else if rounded < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{} dps", group_thousands(rounded.abs() as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
