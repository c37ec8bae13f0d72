//
//  config.rs
//  Sampler
//

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Top-level sampler configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

/// Class definition cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached class definitions.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Seconds before a cached definition is treated as a miss.
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

/// Body synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Maximum nesting depth expanded from a property tree.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Drop "type not found" warnings (preview rendering).
    #[serde(default)]
    pub suppress_unresolved_warnings: bool,
}

fn default_capacity() -> usize {
    100
}

fn default_max_age_secs() -> u64 {
    30 * 60
}

fn default_max_depth() -> usize {
    8
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            suppress_unresolved_warnings: false,
        }
    }
}

impl CacheConfig {
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }
}

impl SamplerConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Load config from a TOML file, reporting read and parse failures.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
