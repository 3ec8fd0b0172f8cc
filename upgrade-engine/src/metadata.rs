//! Item metadata lookup against the report's item library.

use std::collections::HashMap;

use crate::{
    codec::ItemDescriptor,
    report::{Encounter, LibraryItem},
};

/// Display fields resolved for a descriptor. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub encounter: Option<Encounter>,
}

/// Read-only index over the item library, keyed by the stringified item id.
///
/// Descriptor ids are never parsed; the library side is turned into strings so
/// that `"0123"` does not match item `123`.
#[derive(Debug)]
pub struct MetadataLibrary<'a> {
    by_id: HashMap<String, &'a LibraryItem>,
}

impl<'a> MetadataLibrary<'a> {
    /// Indexes `items`. When an id appears twice the first entry wins.
    pub fn new(items: &'a [LibraryItem]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            by_id.entry(item.id.to_string()).or_insert(item);
        }
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn item(&self, item_id: &str) -> Option<&'a LibraryItem> {
        self.by_id.get(item_id).copied()
    }

    /// Looks up name, icon and encounter for `descriptor`.
    ///
    /// The encounter is searched only within the matched item's own encounter
    /// list.
    pub fn resolve(&self, descriptor: &ItemDescriptor) -> Resolution {
        let Some(item) = self.item(&descriptor.item_id) else {
            return Resolution::default();
        };

        let encounter = item
            .instance
            .encounters
            .iter()
            .find(|e| e.id.to_string() == descriptor.encounter_id)
            .cloned();

        Resolution {
            name: Some(item.name.clone()),
            icon: Some(item.icon.clone()),
            encounter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::decode, report::ItemInstance};

    fn item(id: u64, name: &str, encounters: &[(u64, &str)]) -> LibraryItem {
        LibraryItem {
            id,
            name: name.to_owned(),
            icon: format!("icon_{id}"),
            instance: ItemInstance {
                encounters: encounters
                    .iter()
                    .map(|(id, name)| Encounter {
                        id: *id,
                        name: (*name).to_owned(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn resolves_item_and_encounter() {
        let items = vec![item(1001, "Crown", &[(10, "First Boss"), (20, "Second Boss")])];
        let lib = MetadataLibrary::new(&items);

        let r = lib.resolve(&decode("5/20/heroic/1001/400/0/head").unwrap());
        assert_eq!(r.name.as_deref(), Some("Crown"));
        assert_eq!(r.icon.as_deref(), Some("icon_1001"));
        assert_eq!(r.encounter.map(|e| e.name), Some("Second Boss".to_owned()));
    }

    #[test]
    fn missing_item_leaves_everything_absent() {
        let items = vec![item(1001, "Crown", &[(10, "First Boss")])];
        let lib = MetadataLibrary::new(&items);

        let r = lib.resolve(&decode("5/10/heroic/9999/400/0/head").unwrap());
        assert_eq!(r, Resolution::default());
    }

    #[test]
    fn missing_encounter_keeps_item_fields() {
        let items = vec![item(1001, "Crown", &[(10, "First Boss")])];
        let lib = MetadataLibrary::new(&items);

        let r = lib.resolve(&decode("5/77/heroic/1001/400/0/head").unwrap());
        assert_eq!(r.name.as_deref(), Some("Crown"));
        assert!(r.encounter.is_none());
    }

    #[test]
    fn ids_compare_as_strings() {
        let items = vec![item(123, "Ring", &[(7, "Boss")])];
        let lib = MetadataLibrary::new(&items);

        assert!(lib.resolve(&decode("0/7/x/0123/1/0/finger1").unwrap()).name.is_none());
        let r = lib.resolve(&decode("0/07/x/123/1/0/finger1").unwrap());
        assert!(r.name.is_some());
        assert!(r.encounter.is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let items = vec![item(1, "First", &[]), item(1, "Second", &[])];
        let lib = MetadataLibrary::new(&items);
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.item("1").map(|i| i.name.as_str()), Some("First"));
    }
}
