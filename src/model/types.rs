//
//  types.rs
//  Sampler
//

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Location sentinel used when a warning applies to a whole class.
pub const CLASS_SCOPE_FIELD: &str = "__class__";

/// Separator between the parts of a serialized warning.
pub const WARNING_SEPARATOR: char = '|';

/// Where an endpoint parameter is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    Path,
    Query,
    Body,
    Form,
}

impl fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParameterSource::Path => "path",
            ParameterSource::Query => "query",
            ParameterSource::Body => "body",
            ParameterSource::Form => "form",
        };
        f.write_str(s)
    }
}

/// What a property node stands for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// An ordinary field of a class.
    #[default]
    Field,
    /// The enclosing type is an enum; values are in declaration order.
    Enum(Vec<String>),
}

/// One field of a body/form class, with its resolved nested fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyDescriptor>>,
    #[serde(default)]
    pub kind: PropertyKind,
    /// Note about a base class the parser could not resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance_warning: Option<String>,
}

impl PropertyDescriptor {
    /// A plain field with no nested tree.
    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            properties: None,
            kind: PropertyKind::Field,
            inheritance_warning: None,
        }
    }

    /// A field whose type resolved to the given nested properties.
    pub fn object(
        name: impl Into<String>,
        type_name: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            properties: Some(properties),
            ..Self::field(name, type_name)
        }
    }

    /// A synthetic node marking that the enclosing type is an enum.
    pub fn enum_marker<I, S>(type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let type_name = type_name.into();
        Self {
            kind: PropertyKind::Enum(values.into_iter().map(Into::into).collect()),
            ..Self::field(type_name.clone(), type_name)
        }
    }

    pub fn with_inheritance_warning(mut self, warning: impl Into<String>) -> Self {
        self.inheritance_warning = Some(warning.into());
        self
    }

    /// Nested properties, if any were resolved.
    pub fn nested(&self) -> Option<&[PropertyDescriptor]> {
        self.properties.as_deref().filter(|p| !p.is_empty())
    }

    /// First declared enum value when this node is an enum marker.
    pub fn enum_first_value(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Enum(values) => Some(values.first().map(String::as_str).unwrap_or("")),
            PropertyKind::Field => None,
        }
    }
}

/// One formal parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub source: ParameterSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyDescriptor>>,
}

impl ParameterDescriptor {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        source: ParameterSource,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            source,
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Resolved property tree, if non-empty.
    pub fn nested(&self) -> Option<&[PropertyDescriptor]> {
        self.properties.as_deref().filter(|p| !p.is_empty())
    }
}

/// Structural description of one API route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: String,
    pub route: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl EndpointDescriptor {
    pub fn new(method: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            route: route.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parameters bound from the given source, in declaration order.
    pub fn parameters_from(
        &self,
        source: ParameterSource,
    ) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(move |p| p.source == source)
    }

    /// POST, PUT and PATCH carry a request body.
    pub fn has_body_method(&self) -> bool {
        matches!(
            self.method.to_ascii_uppercase().as_str(),
            "POST" | "PUT" | "PATCH"
        )
    }
}

/// Base URL, base path and default headers of a target environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Why synthesis could not fully complete for one field or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisWarning {
    /// Field the warning is about; `None` for the class as a whole.
    pub field: Option<String>,
    pub message: String,
    pub remediation: String,
}

impl SynthesisWarning {
    pub fn for_field(
        field: impl Into<String>,
        message: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            remediation: remediation.into(),
        }
    }

    pub fn for_class(message: impl Into<String>, remediation: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
            remediation: remediation.into(),
        }
    }

    /// Location shown to the user: the field name or the class sentinel.
    pub fn location(&self) -> &str {
        self.field.as_deref().unwrap_or(CLASS_SCOPE_FIELD)
    }

    /// Serialized `location|message|remediation` form for UI layers.
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The separator cannot appear inside a part or the UI split breaks.
        let clean = |s: &str| s.replace(WARNING_SEPARATOR, "/");
        write!(
            f,
            "{}{sep}{}{sep}{}",
            clean(self.location()),
            clean(&self.message),
            clean(&self.remediation),
            sep = WARNING_SEPARATOR
        )
    }
}

/// A fully assembled sample request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRequest {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub query_params: Map<String, Value>,
    pub path_params: Map<String, Value>,
    pub body: Option<Value>,
    pub form_data: Option<Map<String, Value>>,
    pub errors: Vec<SynthesisWarning>,
}

impl GeneratedRequest {
    /// Warnings in their serialized `location|message|remediation` form.
    pub fn wire_errors(&self) -> Vec<String> {
        self.errors.iter().map(SynthesisWarning::to_wire).collect()
    }
}
