//! # Sampler SDK
//!
//! Plausible sample HTTP requests for detected API endpoints.
//!
//! Sampler takes endpoint descriptors (route, method, typed parameters with
//! resolved property trees) and turns them into a ready-to-send request:
//! URL, headers, query/path values, and a JSON or form-data body.
//!
//! ## Key Features
//!
//! - **Heuristic values**: field names and declared types pick the sample
//! - **Recursive bodies**: nested classes and collections, cycle-safe
//! - **Warnings as data**: unresolved types become structured warnings, not errors
//! - **Class cache**: parsed definitions kept in a bounded, expiring LRU cache
//!
//! ## Quick Start
//!
//! ```rust
//! use sampler::{EndpointDescriptor, ParameterDescriptor, ParameterSource, Sampler};
//!
//! let sampler = Sampler::new();
//! let endpoint = EndpointDescriptor::new("GET", "/users/{id}")
//!     .with_parameter(ParameterDescriptor::new("id", "int", ParameterSource::Path));
//!
//! let request = sampler.generate(&endpoint, "https://api.example.com/");
//! assert!(request.url.starts_with("https://api.example.com/users/"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod sample;
pub mod synth;

// Re-exports for convenience
pub use cache::{CacheStats, ClassDefinition, ClassDefinitionCache, SharedClassCache};
pub use config::SamplerConfig;
pub use error::{Result, SamplerError};
pub use model::{
    EndpointDescriptor, EnvironmentDescriptor, GeneratedRequest, ParameterDescriptor,
    ParameterSource, PropertyDescriptor, PropertyKind, SynthesisWarning,
};
pub use request::RequestAssembler;
pub use sample::SampleValueProvider;
pub use synth::{ParseErrorSource, RequestBodySynthesizer, SynthesisOptions, SynthesisResult};

use serde_json::Value;
use tracing::debug;

use crate::sample::{element_type, strip_nullable};

/// The main Sampler instance.
///
/// Owns the configuration, the sample value provider and the class
/// definition cache shared by every request it generates.
pub struct Sampler {
    config: SamplerConfig,
    provider: SampleValueProvider,
    cache: SharedClassCache,
}

impl Sampler {
    /// Create a sampler with default configuration.
    pub fn new() -> Self {
        Self::with_config(SamplerConfig::default())
    }

    pub fn with_config(config: SamplerConfig) -> Self {
        let cache = SharedClassCache::with_limits(config.cache.capacity, config.cache.max_age());
        Self {
            config,
            provider: SampleValueProvider::new(),
            cache,
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The class definition cache, for collaborators that parse classes or
    /// watch files.
    pub fn cache(&self) -> &SharedClassCache {
        &self.cache
    }

    /// Store parsed class definitions. Returns how many were stored.
    pub fn load_classes<I>(&self, definitions: I) -> usize
    where
        I: IntoIterator<Item = ClassDefinition>,
    {
        let mut count = 0;
        for definition in definitions {
            self.cache.put(definition);
            count += 1;
        }
        count
    }

    /// Sample value for one field.
    pub fn sample_value(&self, type_name: &str, field_name: &str) -> Value {
        self.provider.value_for(type_name, field_name)
    }

    /// Fill missing body/form property trees from the class cache.
    ///
    /// Parameters that already carry a tree, and types the cache knows only
    /// by their parse errors, are left as they are.
    pub fn hydrate(&self, endpoint: &EndpointDescriptor) -> EndpointDescriptor {
        let mut hydrated = endpoint.clone();
        for param in &mut hydrated.parameters {
            if !matches!(param.source, ParameterSource::Body | ParameterSource::Form)
                || param.nested().is_some()
            {
                continue;
            }
            let type_name = strip_nullable(element_type(&param.type_name));
            if let Some(entry) = self.cache.get(type_name) {
                if !entry.definition.properties.is_empty() {
                    debug!(parameter = %param.name, type_name, "hydrated from class cache");
                    param.properties = Some(entry.definition.properties);
                }
            }
        }
        hydrated
    }

    /// Build a request against a plain base URL.
    pub fn generate(&self, endpoint: &EndpointDescriptor, base_url: &str) -> GeneratedRequest {
        let endpoint = self.hydrate(endpoint);
        self.assembler().assemble_with_base_url(&endpoint, base_url)
    }

    /// Build a request against an environment. `preview` suppresses
    /// unresolved-type warnings for incremental rendering.
    pub fn generate_for_environment(
        &self,
        endpoint: &EndpointDescriptor,
        environment: &EnvironmentDescriptor,
        preview: bool,
    ) -> GeneratedRequest {
        let endpoint = self.hydrate(endpoint);
        self.assembler()
            .assemble_with_environment(&endpoint, environment, preview)
    }

    fn assembler(&self) -> RequestAssembler<'_> {
        let options = SynthesisOptions {
            suppress_unresolved_warnings: self.config.synthesis.suppress_unresolved_warnings,
            max_depth: self.config.synthesis.max_depth,
        };
        RequestAssembler::new(&self.provider, &self.cache, options)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
