//
//  form.rs
//  Sampler
//
//  Flat (non-recursive) objects: multi-parameter bodies and form-data.
//

use serde_json::{json, Map, Value};

use crate::model::{ParameterDescriptor, PropertyDescriptor};
use crate::sample::{is_file_type, SampleValueProvider, FILE_PLACEHOLDER};

fn scalar(provider: &SampleValueProvider, type_name: &str, name: &str) -> Value {
    if is_file_type(type_name) {
        json!(FILE_PLACEHOLDER)
    } else {
        provider.value_for(type_name, name)
    }
}

/// One field per parameter, valued by name/type heuristics only.
pub fn flat_object(
    provider: &SampleValueProvider,
    parameters: &[&ParameterDescriptor],
) -> Map<String, Value> {
    parameters
        .iter()
        .map(|p| (p.name.clone(), scalar(provider, &p.type_name, &p.name)))
        .collect()
}

/// Form-data fields for the given form parameters.
///
/// A parameter bound to a form class contributes one field per top-level
/// property; any other parameter is a single field.
pub fn form_fields(
    provider: &SampleValueProvider,
    parameters: &[&ParameterDescriptor],
) -> Map<String, Value> {
    let mut fields = Map::new();
    for param in parameters {
        match param.nested() {
            Some(properties) => {
                for property in properties {
                    fields.insert(property.name.clone(), form_property(provider, property));
                }
            }
            None => {
                fields.insert(
                    param.name.clone(),
                    scalar(provider, &param.type_name, &param.name),
                );
            }
        }
    }
    fields
}

fn form_property(provider: &SampleValueProvider, property: &PropertyDescriptor) -> Value {
    if let Some(first) = property.enum_first_value() {
        return json!(first);
    }
    if let Some(first) = property
        .nested()
        .and_then(|nested| nested[0].enum_first_value())
    {
        return json!(first);
    }
    scalar(provider, &property.type_name, &property.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterSource;

    #[test]
    fn test_form_fields_flatten_form_class() {
        let provider = SampleValueProvider::new();
        let model = ParameterDescriptor::new("model", "UploadForm", ParameterSource::Form)
            .with_properties(vec![
                PropertyDescriptor::field("title", "string"),
                PropertyDescriptor::field("attachment", "IFormFile"),
                PropertyDescriptor::object(
                    "visibility",
                    "Visibility",
                    vec![PropertyDescriptor::enum_marker("Visibility", ["Public", "Private"])],
                ),
            ]);
        let extra = ParameterDescriptor::new("notes", "string", ParameterSource::Form);

        let fields = form_fields(&provider, &[&model, &extra]);
        assert_eq!(fields["title"], json!("Sample Name"));
        assert_eq!(fields["attachment"], json!(FILE_PLACEHOLDER));
        assert_eq!(fields["visibility"], json!("Public"));
        assert_eq!(fields["notes"], json!("sample string"));
        assert!(!fields.contains_key("model"));
    }

    #[test]
    fn test_flat_object() {
        let provider = SampleValueProvider::new();
        let a = ParameterDescriptor::new("price", "decimal", ParameterSource::Body);
        let b = ParameterDescriptor::new("enabled", "bool", ParameterSource::Body);
        let object = flat_object(&provider, &[&a, &b]);
        assert_eq!(Value::Object(object), json!({"price": 99.99, "enabled": true}));
    }
}
