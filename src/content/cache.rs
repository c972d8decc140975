//! Fetch-once memo table for content lists.
//!
//! Entries live for the whole session: no eviction, no expiry. Only
//! successful fetches are stored, so a failed category can be retried.

use std::collections::HashMap;

use super::{Category, ContentItem};

#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<Category, Vec<ContentItem>>,
    hits: u64,
    misses: u64,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a category, counting the hit or miss.
    pub fn lookup(&mut self, category: Category) -> Option<&[ContentItem]> {
        match self.entries.get(&category) {
            Some(items) => {
                self.hits += 1;
                log::debug!("content cache HIT: {}", category);
                Some(items.as_slice())
            }
            None => {
                self.misses += 1;
                log::debug!("content cache MISS: {}", category);
                None
            }
        }
    }

    /// Peek without touching the counters.
    pub fn get(&self, category: Category) -> Option<&[ContentItem]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    /// Store a fetched list. An already populated key keeps its first value.
    pub fn store(&mut self, category: Category, items: Vec<ContentItem>) -> &[ContentItem] {
        self.entries.entry(category).or_insert(items).as_slice()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit rate over all lookups (0.0 - 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> ContentItem {
        ContentItem::new(title, "Action", "https://img/x.jpg", "SERIES")
    }

    #[test]
    fn lookup_miss_then_hit() {
        let mut cache = ContentCache::new();
        assert!(cache.lookup(Category::Series).is_none());

        cache.store(Category::Series, vec![item("Frieren")]);
        let hit = cache.lookup(Category::Series).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "Frieren");
        assert!((cache.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn store_keeps_first_value() {
        let mut cache = ContentCache::new();
        cache.store(Category::Movies, vec![item("Akira")]);
        let kept = cache.store(Category::Movies, vec![item("Paprika"), item("Perfect Blue")]);
        assert_eq!(kept.len(), 1);
        assert_eq!(cache.get(Category::Movies).unwrap()[0].title, "Akira");
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = ContentCache::new();
        cache.store(Category::Series, vec![item("Mushishi")]);
        assert!(cache.contains(Category::Series));
        assert!(!cache.contains(Category::Movies));
        assert_eq!(cache.len(), 1);
    }
}
