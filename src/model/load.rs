//
//  load.rs
//  Sampler
//
//  Reading descriptors handed over as JSON files by collaborators.
//

use std::path::Path;

use serde::de::DeserializeOwned;

use super::types::{EndpointDescriptor, EnvironmentDescriptor};
use crate::cache::ClassDefinition;
use crate::error::{Result, SamplerError};

const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read and validate an endpoint descriptor.
pub fn read_endpoint(path: &Path) -> Result<EndpointDescriptor> {
    let endpoint: EndpointDescriptor = read_json(path)?;
    validate_endpoint(&endpoint)?;
    Ok(endpoint)
}

pub fn read_environment(path: &Path) -> Result<EnvironmentDescriptor> {
    let environment: EnvironmentDescriptor = read_json(path)?;
    if environment.base_url.trim().is_empty() {
        return Err(SamplerError::InvalidDescriptor(
            "environment base_url cannot be empty".to_string(),
        ));
    }
    Ok(environment)
}

/// Read a JSON array of parsed class definitions.
pub fn read_classes(path: &Path) -> Result<Vec<ClassDefinition>> {
    read_json(path)
}

/// Reject descriptors no request can be built from.
pub fn validate_endpoint(endpoint: &EndpointDescriptor) -> Result<()> {
    let method = endpoint.method.to_ascii_uppercase();
    if !HTTP_METHODS.contains(&method.as_str()) {
        return Err(SamplerError::InvalidDescriptor(format!(
            "unsupported HTTP method: {}",
            endpoint.method
        )));
    }

    if let Some(param) = endpoint.parameters.iter().find(|p| p.name.trim().is_empty()) {
        return Err(SamplerError::InvalidDescriptor(format!(
            "{} parameter of type '{}' has no name",
            param.source, param.type_name
        )));
    }

    Ok(())
}
