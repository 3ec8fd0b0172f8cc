//! Decoder for the item identifier embedded in profileset result names.
//!
//! Format (owned by the report producer, anchored at position 0):
//!
//! ```text
//! instanceId/encounterId/difficulty/itemId/itemLevel/enchantId/slot[anything]
//! ```
//!
//! A field is any run of characters other than `/` and `\`. The first six
//! fields must each be closed by `/`. The slot field ends at the next `/`, `\`
//! or the end of the string; whatever follows it is ignored.

use serde::{Deserialize, Serialize};

use crate::slots::Slot;

/// Number of positional fields in an encoded name.
pub const FIELD_COUNT: usize = 7;

const SEPARATOR: char = '/';

/// Structured form of an encoded result name.
///
/// All ids stay strings: they are compared against stringified library ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub instance_id: String,
    pub encounter_id: String,
    pub difficulty: String,
    pub item_id: String,
    pub item_level: String,
    pub enchant_id: String,
    pub slot: Slot,
}

fn is_field_break(c: char) -> bool {
    c == SEPARATOR || c == '\\'
}

/// Splits `name` into its seven raw fields without interpreting any of them.
///
/// Returns `None` when the string does not have the seven-field shape from
/// its first character.
pub fn decode_fields(name: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut fields = [""; FIELD_COUNT];
    let mut rest = name;

    for field in fields.iter_mut().take(FIELD_COUNT - 1) {
        let end = rest.find(is_field_break)?;
        if !rest[end..].starts_with(SEPARATOR) {
            return None;
        }
        *field = &rest[..end];
        rest = &rest[end + SEPARATOR.len_utf8()..];
    }

    let end = rest.find(is_field_break).unwrap_or(rest.len());
    fields[FIELD_COUNT - 1] = &rest[..end];

    Some(fields)
}

/// Decodes a result name into an [`ItemDescriptor`].
///
/// Names that do not split into seven fields, or whose slot field is not a
/// canonical slot key, decode to `None`.
pub fn decode(name: &str) -> Option<ItemDescriptor> {
    let [instance_id, encounter_id, difficulty, item_id, item_level, enchant_id, slot] =
        decode_fields(name)?;

    Some(ItemDescriptor {
        instance_id: instance_id.to_owned(),
        encounter_id: encounter_id.to_owned(),
        difficulty: difficulty.to_owned(),
        item_id: item_id.to_owned(),
        item_level: item_level.to_owned(),
        enchant_id: enchant_id.to_owned(),
        slot: Slot::from_key(slot)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_fields() {
        let d = decode("1200/2430/raid-heroic/212394/626/7981/trinket1").unwrap();
        assert_eq!(d.instance_id, "1200");
        assert_eq!(d.encounter_id, "2430");
        assert_eq!(d.difficulty, "raid-heroic");
        assert_eq!(d.item_id, "212394");
        assert_eq!(d.item_level, "626");
        assert_eq!(d.enchant_id, "7981");
        assert_eq!(d.slot, Slot::Trinket1);
    }

    #[test]
    fn ignores_trailing_noise_after_slot() {
        let d = decode("0/0/0/1001/400/0/head///extra").unwrap();
        assert_eq!(d.slot, Slot::Head);
        assert_eq!(d.item_id, "1001");

        let d = decode("0/0/0/1001/400/0/neck\\whatever").unwrap();
        assert_eq!(d.slot, Slot::Neck);
    }

    #[test]
    fn empty_fields_are_allowed() {
        let fields = decode_fields("//////").unwrap();
        assert!(fields.iter().all(|f| f.is_empty()));

        let d = decode("//////back").unwrap();
        assert_eq!(d.item_id, "");
        assert_eq!(d.slot, Slot::Back);
    }

    #[test]
    fn rejects_short_or_broken_names() {
        assert!(decode_fields("").is_none());
        assert!(decode_fields("Combo 1").is_none());
        assert!(decode_fields("0/0/0/1001/400/head").is_none());
        // A backslash may not stand in for a separator before the slot field.
        assert!(decode_fields("0/0/0\\1001/400/0/head").is_none());
    }

    #[test]
    fn unknown_slot_splits_but_does_not_decode() {
        let fields = decode_fields("0/0/0/1001/400/0/ranged").unwrap();
        assert_eq!(fields[6], "ranged");
        assert!(decode("0/0/0/1001/400/0/ranged").is_none());
        assert!(decode("0/0/0/1001/400/0/").is_none());
    }

    #[test]
    fn successful_decode_always_yields_canonical_slot() {
        let names = [
            "0/0/0/1/1/0/main_hand",
            "0/0/0/1/1/0/off_hand/",
            "0/0/0/1/1/0/finger2 ",
            "0/0/0/1/1/0/trinket2",
            "a/b/c/d/e/f/g",
        ];
        for name in names {
            if let Some(d) = decode(name) {
                assert!(Slot::ALL.contains(&d.slot), "{name}");
            }
        }
        // A trailing space is part of the slot field, so it is not canonical.
        assert!(decode("0/0/0/1/1/0/finger2 ").is_none());
    }
}
