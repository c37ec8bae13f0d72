//! Class definition cache: LRU ordering bounded by capacity and age.

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use lru::LruCache;
use tracing::debug;

use super::types::{CacheEntry, CacheStats, ClassDefinition};

pub const DEFAULT_CAPACITY: usize = 100;
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30 * 60);

/// Maps a type name to its most recently parsed definition.
///
/// A lookup promotes the entry to most recently used; an entry older than
/// `max_age` is dropped on lookup and reported as a miss. Nothing here fails.
pub struct ClassDefinitionCache {
    entries: LruCache<String, CacheEntry>,
    max_age: Duration,
}

impl ClassDefinitionCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_MAX_AGE)
    }

    pub fn with_limits(capacity: usize, max_age: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            max_age,
        }
    }

    /// Look up a type, promoting it on a hit.
    pub fn get(&mut self, type_name: &str) -> Option<CacheEntry> {
        self.get_at(type_name, Utc::now())
    }

    pub(crate) fn get_at(&mut self, type_name: &str, now: DateTime<Utc>) -> Option<CacheEntry> {
        let inserted_at = match self.entries.peek(type_name) {
            Some(entry) => entry.inserted_at,
            None => {
                debug!(type_name, "class cache miss");
                return None;
            }
        };

        if self.is_expired(inserted_at, now) {
            self.entries.pop(type_name);
            debug!(type_name, "class cache entry expired");
            return None;
        }

        debug!(type_name, "class cache hit");
        self.entries.get(type_name).cloned()
    }

    /// Store a definition, evicting the least recently used entry when full.
    pub fn put(&mut self, definition: ClassDefinition) {
        self.put_at(definition, Utc::now());
    }

    pub(crate) fn put_at(&mut self, definition: ClassDefinition, now: DateTime<Utc>) {
        let key = definition.type_name.clone();
        let entry = CacheEntry {
            definition,
            inserted_at: now,
        };
        if let Some((evicted, _)) = self.entries.push(key.clone(), entry) {
            if evicted != key {
                debug!(evicted = %evicted, "class cache evicted least recently used entry");
            }
        }
    }

    /// Drop one type.
    pub fn invalidate(&mut self, type_name: &str) -> bool {
        self.entries.pop(type_name).is_some()
    }

    /// Drop every type parsed from `path`. Returns how many were removed.
    pub fn invalidate_by_source_file(&mut self, path: &Path) -> usize {
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.definition.source_file == path)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            self.entries.pop(key);
        }
        if !stale.is_empty() {
            debug!(file = %path.display(), removed = stale.len(), "class cache invalidated by file");
        }
        stale.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            capacity: self.entries.cap().get(),
            keys: self.entries.iter().rev().map(|(key, _)| key.clone()).collect(),
        }
    }

    fn is_expired(&self, inserted_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A timestamp in the future (clock adjusted backwards) counts as fresh.
        match (now - inserted_at).to_std() {
            Ok(age) => age > self.max_age,
            Err(_) => false,
        }
    }
}

impl Default for ClassDefinitionCache {
    fn default() -> Self {
        Self::new()
    }
}
