//! Request body synthesis from parameter lists and property trees.
//!
//! Unresolved types never abort synthesis: the affected field gets `null`
//! (or `[]` for collections) and a warning, and its siblings carry on.

use serde_json::{json, Map, Value};
use tracing::debug;

use super::form::flat_object;
use super::warnings;
use super::ParseErrorSource;
use crate::model::{ParameterDescriptor, ParameterSource, PropertyDescriptor, SynthesisWarning};
use crate::sample::{
    element_type, is_collection_type, is_complex_type, is_file_type, is_simple_type,
    strip_nullable, SampleValueProvider, FILE_PLACEHOLDER,
};

pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Caller-controlled synthesis behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Preview mode: drop "type not found" warnings for the body type.
    pub suppress_unresolved_warnings: bool,
    /// Nested class levels expanded below the body class.
    pub max_depth: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            suppress_unresolved_warnings: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SynthesisOptions {
    pub fn preview() -> Self {
        Self {
            suppress_unresolved_warnings: true,
            ..Self::default()
        }
    }
}

/// Body value plus the warnings raised while building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisResult {
    pub body: Option<Value>,
    pub errors: Vec<SynthesisWarning>,
}

impl SynthesisResult {
    fn empty() -> Self {
        Self::default()
    }

    fn body(body: Value) -> Self {
        Self {
            body: Some(body),
            errors: Vec::new(),
        }
    }
}

/// State carried down one recursive walk.
struct Walk {
    /// Type names currently being expanded, outermost first.
    stack: Vec<String>,
    errors: Vec<SynthesisWarning>,
}

/// Builds JSON-shaped sample bodies.
pub struct RequestBodySynthesizer<'a> {
    provider: &'a SampleValueProvider,
    parse_errors: &'a dyn ParseErrorSource,
}

impl<'a> RequestBodySynthesizer<'a> {
    pub fn new(provider: &'a SampleValueProvider, parse_errors: &'a dyn ParseErrorSource) -> Self {
        Self {
            provider,
            parse_errors,
        }
    }

    /// Synthesize a body for the endpoint's parameters.
    pub fn synthesize(
        &self,
        parameters: &[ParameterDescriptor],
        options: &SynthesisOptions,
    ) -> SynthesisResult {
        let body_params: Vec<&ParameterDescriptor> = parameters
            .iter()
            .filter(|p| p.source == ParameterSource::Body)
            .collect();

        match body_params.as_slice() {
            [single] => self.single_parameter(single, options),
            [] => {
                let form_params: Vec<&ParameterDescriptor> = parameters
                    .iter()
                    .filter(|p| p.source == ParameterSource::Form)
                    .collect();
                if form_params.is_empty() {
                    SynthesisResult::empty()
                } else {
                    debug!(count = form_params.len(), "body from form parameters");
                    SynthesisResult::body(Value::Object(flat_object(self.provider, &form_params)))
                }
            }
            many => {
                debug!(count = many.len(), "flat body from multiple body parameters");
                SynthesisResult::body(Value::Object(flat_object(self.provider, many)))
            }
        }
    }

    fn single_parameter(
        &self,
        param: &ParameterDescriptor,
        options: &SynthesisOptions,
    ) -> SynthesisResult {
        if let Some(properties) = param.nested() {
            if let Some(first) = properties[0].enum_first_value() {
                return SynthesisResult::body(json!(first));
            }

            let mut walk = Walk {
                stack: vec![strip_nullable(element_type(&param.type_name)).to_string()],
                errors: Vec::new(),
            };
            if let Some(note) = &properties[0].inheritance_warning {
                walk.errors.push(warnings::base_class(note));
            }

            let object = Value::Object(self.object(properties, &mut walk, options));
            let body = if is_collection_type(&param.type_name) {
                json!([object])
            } else {
                object
            };
            debug!(
                parameter = %param.name,
                warnings = walk.errors.len(),
                "synthesized body from property tree"
            );
            return SynthesisResult {
                body: Some(body),
                errors: walk.errors,
            };
        }

        let element = strip_nullable(element_type(&param.type_name));
        let value = if is_file_type(element) {
            json!(FILE_PLACEHOLDER)
        } else if is_simple_type(element) {
            self.provider.value_for(element, &param.name)
        } else {
            return self.unresolved_parameter(param, options);
        };
        let body = if is_collection_type(&param.type_name) {
            json!([value])
        } else {
            value
        };
        SynthesisResult::body(body)
    }

    fn unresolved_parameter(
        &self,
        param: &ParameterDescriptor,
        options: &SynthesisOptions,
    ) -> SynthesisResult {
        let type_name = strip_nullable(element_type(&param.type_name));

        if let Some(errors) = self
            .parse_errors
            .parse_errors(type_name)
            .filter(|errors| !errors.is_empty())
        {
            debug!(type_name, count = errors.len(), "using cached parse errors");
            return SynthesisResult {
                body: None,
                errors: errors
                    .iter()
                    .map(|e| warnings::from_parse_error(type_name, e))
                    .collect(),
            };
        }

        if options.suppress_unresolved_warnings {
            return SynthesisResult::empty();
        }

        SynthesisResult {
            body: None,
            errors: vec![warnings::unresolved_body(&param.name, type_name)],
        }
    }

    fn object(
        &self,
        properties: &[PropertyDescriptor],
        walk: &mut Walk,
        options: &SynthesisOptions,
    ) -> Map<String, Value> {
        let mut object = Map::new();
        for property in properties {
            let value = self.property(property, walk, options);
            object.insert(property.name.clone(), value);
        }
        object
    }

    fn property(
        &self,
        property: &PropertyDescriptor,
        walk: &mut Walk,
        options: &SynthesisOptions,
    ) -> Value {
        if let Some(first) = property.enum_first_value() {
            return json!(first);
        }
        if is_collection_type(&property.type_name) {
            let element = strip_nullable(element_type(&property.type_name));
            if is_file_type(element) {
                return json!([FILE_PLACEHOLDER]);
            }
            if let Some(nested) = property.nested() {
                return match self.nested(&property.name, element, nested, walk, options) {
                    Some(value) => json!([value]),
                    None => json!([]),
                };
            }
            if is_complex_type(element) {
                walk.errors
                    .push(warnings::unresolved_element(&property.name, element));
                return json!([]);
            }
            return json!([self.provider.value_for(element, &property.name)]);
        }

        if is_file_type(&property.type_name) {
            return json!(FILE_PLACEHOLDER);
        }
        if is_complex_type(&property.type_name) {
            let type_name = strip_nullable(&property.type_name);
            return match property.nested() {
                Some(nested) => self
                    .nested(&property.name, type_name, nested, walk, options)
                    .unwrap_or(Value::Null),
                None => {
                    walk.errors
                        .push(warnings::unresolved_field(&property.name, type_name));
                    Value::Null
                }
            };
        }

        self.provider.value_for(&property.type_name, &property.name)
    }

    /// Expand a nested class, or `None` when the recursion guard trips.
    fn nested(
        &self,
        field: &str,
        type_name: &str,
        properties: &[PropertyDescriptor],
        walk: &mut Walk,
        options: &SynthesisOptions,
    ) -> Option<Value> {
        if let Some(first) = properties[0].enum_first_value() {
            return Some(json!(first));
        }

        if walk.stack.iter().any(|t| t == type_name) || walk.stack.len() > options.max_depth {
            debug!(field, type_name, depth = walk.stack.len(), "recursion guard tripped");
            walk.errors.push(warnings::recursion_limit(field, type_name));
            return None;
        }

        walk.stack.push(type_name.to_string());
        let object = self.object(properties, walk, options);
        walk.stack.pop();
        Some(Value::Object(object))
    }
}
