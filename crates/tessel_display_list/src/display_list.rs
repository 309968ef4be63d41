//! Ordered container of recorded items

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::items::{Item, ItemType};
use crate::text_stream::TextStream;

/// Recorded items in the order they were issued
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    items: Vec<Item>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Item> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Move all items out, leaving the list empty
    pub fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    /// How many items of each type the list holds
    pub fn item_type_counts(&self) -> FxHashMap<ItemType, usize> {
        let mut counts = FxHashMap::default();
        for item in &self.items {
            *counts.entry(item.item_type()).or_insert(0) += 1;
        }
        counts
    }

    /// Write the whole list as a `(display-list ...)` group
    pub fn dump(&self, ts: &mut TextStream) {
        ts.begin_group("display-list");
        for item in &self.items {
            item.dump(ts);
        }
        ts.end_group();
    }
}

impl fmt::Display for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ts = TextStream::new();
        self.dump(&mut ts);
        f.write_str(ts.as_str())
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for DisplayList {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Item> for DisplayList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Item> for DisplayList {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{FillRect, Restore, Save, Translate};
    use tessel_core::Rect;

    fn sample() -> DisplayList {
        let mut list = DisplayList::new();
        list.append(Save);
        list.append(Translate::new(5.0, 5.0));
        list.append(FillRect::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        list.append(Restore);
        list
    }

    #[test]
    fn test_append_keeps_order() {
        let list = sample();
        let types: Vec<_> = list.iter().map(Item::item_type).collect();
        assert_eq!(
            types,
            vec![ItemType::Save, ItemType::Translate, ItemType::FillRect, ItemType::Restore]
        );
    }

    #[test]
    fn test_item_type_counts() {
        let mut list = sample();
        list.append(Save);
        let counts = list.item_type_counts();
        assert_eq!(counts.get(&ItemType::Save), Some(&2));
        assert_eq!(counts.get(&ItemType::Restore), Some(&1));
        assert_eq!(counts.get(&ItemType::Clip), None);
    }

    #[test]
    fn test_take_items_empties_list() {
        let mut list = sample();
        let items = list.take_items();
        assert_eq!(items.len(), 4);
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_wraps_items() {
        let mut list = DisplayList::new();
        list.append(Save);
        list.append(Translate::new(1.0, 2.0));
        assert_eq!(
            list.to_string(),
            "(display-list\n  (save)\n  (translate\n    (x 1)\n    (y 2)))"
        );
    }

    #[test]
    fn test_collect_from_items() {
        let list: DisplayList = sample().into_iter().filter(Item::is_drawing_item).collect();
        assert_eq!(list.len(), 1);
    }
}
