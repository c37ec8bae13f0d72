//
//  shared.rs
//  Sampler
//

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use super::class_cache::ClassDefinitionCache;
use super::types::{CacheEntry, CacheStats, ClassDefinition};
use crate::synth::ParseErrorSource;

/// A `ClassDefinitionCache` shared across threads.
///
/// Every operation, including lookups (which reorder), runs under one lock.
pub struct SharedClassCache {
    inner: Mutex<ClassDefinitionCache>,
}

impl SharedClassCache {
    pub fn new(cache: ClassDefinitionCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn with_limits(capacity: usize, max_age: Duration) -> Self {
        Self::new(ClassDefinitionCache::with_limits(capacity, max_age))
    }

    pub fn get(&self, type_name: &str) -> Option<CacheEntry> {
        self.lock().get(type_name)
    }

    pub fn put(&self, definition: ClassDefinition) {
        self.lock().put(definition);
    }

    pub fn invalidate(&self, type_name: &str) -> bool {
        self.lock().invalidate(type_name)
    }

    pub fn invalidate_by_source_file(&self, path: &Path) -> usize {
        self.lock().invalidate_by_source_file(path)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    fn lock(&self) -> MutexGuard<'_, ClassDefinitionCache> {
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl Default for SharedClassCache {
    fn default() -> Self {
        Self::new(ClassDefinitionCache::new())
    }
}

impl ParseErrorSource for SharedClassCache {
    fn parse_errors(&self, type_name: &str) -> Option<Vec<String>> {
        self.get(type_name).and_then(|entry| entry.definition.errors)
    }
}
