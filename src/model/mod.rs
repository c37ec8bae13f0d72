//! Data model shared by the sampler components.
//!
//! Descriptors come in from the endpoint detection and class parsing
//! collaborators; `GeneratedRequest` goes out to UI and HTTP layers.

pub mod load;
pub mod types;

pub use load::{read_classes, read_endpoint, read_environment, validate_endpoint};
pub use types::{
    EndpointDescriptor, EnvironmentDescriptor, GeneratedRequest, ParameterDescriptor,
    ParameterSource, PropertyDescriptor, PropertyKind, SynthesisWarning, CLASS_SCOPE_FIELD,
    WARNING_SEPARATOR,
};
