//
//  types.rs
//  Sampler
//

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::PropertyDescriptor;

/// A parsed class as handed over by the class-parsing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub type_name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_definition: Option<String>,
    pub source_file: PathBuf,
    /// Parse errors reported for this type, if parsing was incomplete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ClassDefinition {
    pub fn new(
        type_name: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
            raw_definition: None,
            source_file: source_file.into(),
            errors: None,
        }
    }

    pub fn with_raw_definition(mut self, raw: impl Into<String>) -> Self {
        self.raw_definition = Some(raw.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// A cached class definition and when it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub definition: ClassDefinition,
    pub inserted_at: DateTime<Utc>,
}

/// Cache introspection for diagnostics surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    /// Cached type names, least recently used first.
    pub keys: Vec<String>,
}
