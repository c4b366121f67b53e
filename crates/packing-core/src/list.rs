//! Packing List
//!
//! Ordered collection of items. Every transition returns a new list and leaves
//! the receiver untouched, so an observer never sees a half-applied update.

use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemId, Quantity};
use crate::stats::{compute_stats, PackingStats};

/// Insertion-ordered items. Ids are expected to be unique; the list does not enforce it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Demo list: passports, socks, shirts and towels with ids 1 to 4
    pub fn sample() -> Self {
        let entries = [
            ("passports", 2, false),
            ("socks", 4, true),
            ("shirts", 2, false),
            ("towels", 4, true),
        ];
        let items = entries
            .into_iter()
            .zip(1u64..)
            .map(|((description, quantity, packed), id)| Item {
                id: ItemId::new(id),
                description: description.to_string(),
                quantity: Quantity::new(quantity).unwrap_or_default(),
                packed,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id in the list, if any
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Append `item` at the end
    pub fn add_item(&self, item: Item) -> Self {
        log::debug!("[LIST] add {} ({})", item.id, item.label());
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Self { items }
    }

    /// Remove the first item with `id`; unchanged when absent
    pub fn delete_item(&self, id: ItemId) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("[LIST] delete {}: not found", id);
            return self.clone();
        };
        log::debug!("[LIST] delete {}", id);
        let mut items = self.items.clone();
        items.remove(index);
        Self { items }
    }

    /// Flip `packed` on the first item with `id`; unchanged when absent
    pub fn toggle_item(&self, id: ItemId) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("[LIST] toggle {}: not found", id);
            return self.clone();
        };
        let mut items = self.items.clone();
        items[index] = items[index].toggled();
        log::debug!("[LIST] toggle {} -> packed={}", id, items[index].packed);
        Self { items }
    }

    /// Empty list
    pub fn clear(&self) -> Self {
        log::debug!("[LIST] clear {} items", self.items.len());
        Self::new()
    }

    pub fn stats(&self) -> PackingStats {
        compute_stats(&self.items)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl<'a> IntoIterator for &'a PackingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_item(id: u64, description: &str) -> Item {
        Item::new(ItemId::new(id), description, Quantity::DEFAULT)
    }

    #[test]
    fn test_add_appends_in_order() {
        let list = PackingList::new()
            .add_item(make_item(1, "passports"))
            .add_item(make_item(2, "socks"));
        let ids: Vec<u64> = list.iter().map(|item| item.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_transitions_leave_receiver_untouched() {
        let list = PackingList::new().add_item(make_item(1, "passports"));
        let before = list.clone();

        let _ = list.add_item(make_item(2, "socks"));
        let _ = list.toggle_item(ItemId::new(1));
        let _ = list.delete_item(ItemId::new(1));

        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let list = PackingList::new().add_item(make_item(1, "passports"));
        assert_eq!(list.delete_item(ItemId::new(99)), list);
    }

    #[test]
    fn test_delete_removes_only_first_duplicate() {
        let list = PackingList::from_items(vec![
            make_item(1, "first"),
            make_item(2, "other"),
            make_item(1, "second"),
        ]);
        let after = list.delete_item(ItemId::new(1));
        let descriptions: Vec<&str> = after.iter().map(|item| item.description.as_str()).collect();
        assert_eq!(descriptions, vec!["other", "second"]);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let list = PackingList::new().add_item(make_item(1, "passports"));
        assert_eq!(list.toggle_item(ItemId::new(2)), list);
    }

    #[test]
    fn test_toggle_touches_only_match() {
        let list = PackingList::new()
            .add_item(make_item(1, "passports"))
            .add_item(make_item(2, "socks"));
        let after = list.toggle_item(ItemId::new(2));
        assert_eq!(after.get(ItemId::new(1)), list.get(ItemId::new(1)));
        assert_eq!(after.get(ItemId::new(2)).map(|item| item.packed), Some(true));
    }

    #[test]
    fn test_sample_list() {
        let sample = PackingList::sample();
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.max_id(), Some(ItemId::new(4)));
        let stats = sample.stats();
        assert_eq!(stats.packed_count, 2);
        assert_eq!(stats.packed_percentage, 50);
        assert_eq!(sample.items()[1].label(), "4 socks");
    }

    #[test]
    fn test_clear() {
        assert!(PackingList::sample().clear().is_empty());
    }

    #[test]
    fn test_serialize_as_array() {
        let list = PackingList::new().add_item(make_item(1, "passports"));
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        let back: PackingList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
