//! Checklist List Model
//!
//! Ordered in-memory items addressed by stable ids. Appends go to the end and
//! nothing here reorders items.

use crate::constants::DEFAULT_CATEGORY;
use crate::error::{ListError, ListResult};
use crate::models::{Item, ItemId, StoredItem};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    items: Vec<Item>,
    next_id: u32,
}

impl Default for ItemList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted records, assigning fresh ids in order
    pub fn from_records(records: Vec<StoredItem>) -> Self {
        let mut list = Self::new();
        for record in records {
            let id = list.allocate_id();
            list.items.push(Item::new(id, record.text, record.category, record.completed));
        }
        list
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new pending item. Blank text is rejected; blank category
    /// falls back to the default one.
    pub fn add(&mut self, text: &str, category: &str) -> ListResult<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ListError::EmptyText);
        }
        let category = match category.trim() {
            "" => DEFAULT_CATEGORY,
            _ => category,
        };

        let id = self.allocate_id();
        self.items
            .push(Item::new(id, text.to_string(), category.to_string(), false));
        Ok(id)
    }

    /// Flip completion. Returns false for an unknown id.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let position = self.position_of(id)?;
        Some(self.items.remove(position))
    }

    /// Remove every item matching `predicate`; returns how many went
    pub fn remove_where(&mut self, predicate: impl Fn(&Item) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    pub fn remove_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn records(&self) -> Vec<StoredItem> {
        self.items.iter().map(Item::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(list: &ItemList, id: ItemId) -> &Item {
        let position = list.position_of(id).expect("item should exist");
        &list.items()[position]
    }

    fn texts(list: &ItemList) -> Vec<&str> {
        list.items().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = ItemList::new();
        let first = list.add("  Buy milk ", "Otros").unwrap();
        let second = list.add("Call Bob", "Trabajo").unwrap();

        assert_ne!(first, second);
        assert_eq!(texts(&list), vec!["Buy milk", "Call Bob"]);
        assert!(!find(&list, first).completed);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = ItemList::new();
        assert_eq!(list.add("   ", "Otros"), Err(ListError::EmptyText));
        assert!(list.is_empty());
    }

    #[test]
    fn test_blank_category_defaults() {
        let mut list = ItemList::new();
        let id = list.add("Pan", " ").unwrap();
        assert_eq!(find(&list, id).category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = ItemList::new();
        let id = list.add("Pan", "Compras").unwrap();
        assert!(!list.toggle(ItemId(99)));
        assert!(list.toggle(id));
        assert!(find(&list, id).completed);
        assert!(list.toggle(id));
        assert!(!find(&list, id).completed);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = ItemList::new();
        list.add("a", "Otros").unwrap();
        let b = list.add("b", "Otros").unwrap();
        list.add("c", "Otros").unwrap();

        assert_eq!(list.remove(b).map(|i| i.text), Some("b".to_string()));
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(list.remove(b).is_none());
    }

    #[test]
    fn test_remove_where_completed() {
        let mut list = ItemList::new();
        let a = list.add("a", "Otros").unwrap();
        list.add("b", "Otros").unwrap();
        let c = list.add("c", "Otros").unwrap();
        list.toggle(a);
        list.toggle(c);

        assert_eq!(list.remove_where(|i| i.completed), 2);
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn test_remove_all_twice() {
        let mut list = ItemList::new();
        list.add("a", "Otros").unwrap();
        assert_eq!(list.remove_all(), 1);
        assert_eq!(list.remove_all(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut list = ItemList::new();
        let a = list.add("a", "Otros").unwrap();
        list.remove(a);
        let b = list.add("b", "Otros").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_records_round_trip() {
        let mut list = ItemList::new();
        let a = list.add("a", "Trabajo").unwrap();
        list.add("b", "Otros").unwrap();
        list.toggle(a);

        let rebuilt = ItemList::from_records(list.records());
        assert_eq!(rebuilt.records(), list.records());
    }
}
