//! Class definition cache.
//!
//! Holds previously parsed class property trees keyed by type name so
//! repeated sample generation does not re-parse unchanged classes.

pub mod class_cache;
pub mod shared;
pub mod types;

pub use class_cache::{ClassDefinitionCache, DEFAULT_CAPACITY, DEFAULT_MAX_AGE};
pub use shared::SharedClassCache;
pub use types::{CacheEntry, CacheStats, ClassDefinition};
