//! The learner's ordered set of memory verses.
use super::scheduler::select_due;
use super::{MemorizedItem, VerseReference};
use crate::error::{Result, VerseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryCollection {
    items: Vec<MemorizedItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionSummary {
    pub total: usize,
    pub due: usize,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-stored items without duplicate checks.
    pub fn from_items(items: Vec<MemorizedItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MemorizedItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MemorizedItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_reference(&self, reference: &VerseReference) -> bool {
        self.items.iter().any(|item| &item.reference == reference)
    }

    pub fn get(&self, id: &str) -> Option<&MemorizedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends `item` unless its passage is already being memorized.
    pub fn add(&mut self, item: MemorizedItem) -> Result<&MemorizedItem> {
        if self.contains_reference(&item.reference) {
            return Err(VerseError::DuplicateVerse(item.reference));
        }
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> Option<MemorizedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replaces the stored item sharing `updated.id`, keeping its position.
    pub fn apply(&mut self, updated: MemorizedItem) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == updated.id)
            .ok_or_else(|| VerseError::ItemNotFound(updated.id.clone()))?;
        *slot = updated;
        Ok(())
    }

    pub fn due(&self, now: DateTime<Utc>) -> Vec<&MemorizedItem> {
        select_due(&self.items, now)
    }

    pub fn summary(&self, now: DateTime<Utc>) -> CollectionSummary {
        CollectionSummary {
            total: self.items.len(),
            due: self.due(now).len(),
        }
    }

    /// Appends every item from `other` whose passage is not present yet.
    /// Returns how many were added.
    pub fn merge(&mut self, other: MemoryCollection) -> usize {
        let mut added = 0;
        for item in other.items {
            match self.add(item) {
                Ok(_) => added += 1,
                Err(e) => tracing::warn!("Skipping import: {}", e),
            }
        }
        added
    }
}

impl<'a> IntoIterator for &'a MemoryCollection {
    type Item = &'a MemorizedItem;
    type IntoIter = std::slice::Iter<'a, MemorizedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sm2::grade;
    use crate::models::{Quality, ReviewOutcome};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap()
    }

    fn item(reference: &str) -> MemorizedItem {
        MemorizedItem::new(reference.parse().unwrap(), "text", now())
    }

    fn create_test_collection() -> MemoryCollection {
        let mut collection = MemoryCollection::new();
        collection.add(item("John 3:16")).unwrap();
        collection.add(item("Psalms 23:1")).unwrap();
        collection.add(item("Romans 8:28")).unwrap();
        collection
    }

    #[test]
    fn test_add_rejects_duplicate_reference() {
        let mut collection = create_test_collection();
        let result = collection.add(item("john 3:16"));
        assert!(matches!(result, Err(VerseError::DuplicateVerse(_))));
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_remove_and_get() {
        let mut collection = create_test_collection();
        let id = collection.items()[1].id.clone();

        assert!(collection.get(&id).is_some());
        let removed = collection.remove(&id).unwrap();
        assert_eq!(removed.reference.book, "Psalms");
        assert!(collection.get(&id).is_none());
        assert!(collection.remove(&id).is_none());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_apply_graded_item_keeps_position() {
        let mut collection = create_test_collection();
        let graded = grade(
            &collection.items()[1],
            Quality::from(ReviewOutcome::Good),
            now(),
        );
        collection.apply(graded).unwrap();

        assert_eq!(collection.items()[1].review_count, 1);
        assert_eq!(collection.items()[1].reference.book, "Psalms");
        assert_eq!(
            collection.summary(now()),
            CollectionSummary { total: 3, due: 2 }
        );
        assert_eq!(
            collection.summary(now() + Duration::days(1)),
            CollectionSummary { total: 3, due: 3 }
        );
    }

    #[test]
    fn test_apply_unknown_id() {
        let mut collection = create_test_collection();
        let stranger = item("Jude 1:24");
        assert!(matches!(
            collection.apply(stranger),
            Err(VerseError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let mut collection = create_test_collection();
        let mut incoming = MemoryCollection::new();
        incoming.add(item("Romans 8:28")).unwrap();
        incoming.add(item("Isaiah 40:31")).unwrap();

        assert_eq!(collection.merge(incoming), 1);
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.items()[3].reference.book, "Isaiah");
    }

    #[test]
    fn test_serializes_as_array() {
        let collection = create_test_collection();
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
