//! Terminal rendering of ranked recommendations.

use colored::Colorize;
use upgrade_engine::display::EntryView;

const SLOT_WIDTH: usize = 12;
const NAME_WIDTH: usize = 40;
const DELTA_WIDTH: usize = 14;

/// One line per entry: slot, item, item level, delta, encounter.
///
/// Non-positive deltas are printed in red.
pub fn render_rows(views: &[EntryView]) -> Vec<String> {
    views
        .iter()
        .map(|v| {
            let name = v
                .name
                .clone()
                .unwrap_or_else(|| format!("item {}", v.item_id));
            let delta = format!("{:>DELTA_WIDTH$}", v.delta_text);
            let delta = if v.is_loss { delta.red() } else { delta.green() };
            let name = format!("{:<NAME_WIDTH$}", truncate(&name, NAME_WIDTH));

            format!(
                "{:<SLOT_WIDTH$} {} {:>4}  {}  {}",
                v.slot_label,
                name.bold(),
                v.item_level,
                delta,
                v.encounter.as_deref().unwrap_or("").dimmed()
            )
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use upgrade_engine::{RecommendationEntry, Slot};

    fn view(slot: Slot, name: Option<&str>, delta: f64) -> EntryView {
        EntryView::from(&RecommendationEntry {
            slot,
            item_id: "1001".into(),
            item_level: "626".into(),
            instance_id: "1".into(),
            difficulty: "heroic".into(),
            enchant_id: "0".into(),
            name: name.map(str::to_owned),
            icon: None,
            encounter: None,
            mean: 0.0,
            delta,
        })
    }

    #[test]
    fn renders_one_row_per_entry() {
        colored::control::set_override(false);
        let rows = render_rows(&[
            view(Slot::Head, Some("Crown"), 1500.0),
            view(Slot::Feet, None, -20.0),
        ]);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Head"));
        assert!(rows[0].contains("Crown"));
        assert!(rows[0].contains("+1,500 dps"));
        assert!(rows[1].contains("item 1001"));
        assert!(rows[1].contains("-20 dps"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
