//! Request assembly: URL, parameters, headers and body in one descriptor.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use super::url::{fill_path_params, join_base_url, join_environment_url, query_string};
use crate::model::{
    EndpointDescriptor, EnvironmentDescriptor, GeneratedRequest, ParameterDescriptor,
    ParameterSource,
};
use crate::sample::SampleValueProvider;
use crate::synth::{form_fields, ParseErrorSource, RequestBodySynthesizer, SynthesisOptions};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const MULTIPART_MEDIA_TYPE: &str = "multipart/form-data";

/// Combines endpoint, base URL or environment into a `GeneratedRequest`.
pub struct RequestAssembler<'a> {
    provider: &'a SampleValueProvider,
    parse_errors: &'a dyn ParseErrorSource,
    options: SynthesisOptions,
}

impl<'a> RequestAssembler<'a> {
    pub fn new(
        provider: &'a SampleValueProvider,
        parse_errors: &'a dyn ParseErrorSource,
        options: SynthesisOptions,
    ) -> Self {
        Self {
            provider,
            parse_errors,
            options,
        }
    }

    /// Build a request against a plain base URL.
    pub fn assemble_with_base_url(
        &self,
        endpoint: &EndpointDescriptor,
        base_url: &str,
    ) -> GeneratedRequest {
        let mut request = self.skeleton(endpoint, join_base_url(base_url, &endpoint.route));
        set_header(&mut request.headers, CONTENT_TYPE, JSON_MEDIA_TYPE);
        set_header(&mut request.headers, ACCEPT, JSON_MEDIA_TYPE);

        if endpoint.has_body_method() {
            self.attach_body(&mut request, endpoint, &self.options);
        }
        request
    }

    /// Build a request against an environment's base URL, base path and
    /// default headers. Form parameters switch the request to form-data.
    pub fn assemble_with_environment(
        &self,
        endpoint: &EndpointDescriptor,
        environment: &EnvironmentDescriptor,
        suppress_unresolved_warnings: bool,
    ) -> GeneratedRequest {
        let mut request = self.skeleton(
            endpoint,
            join_environment_url(environment, &endpoint.route),
        );
        request.headers = environment.headers.clone();
        set_header(&mut request.headers, CONTENT_TYPE, JSON_MEDIA_TYPE);
        set_header(&mut request.headers, ACCEPT, JSON_MEDIA_TYPE);

        let form_params: Vec<&ParameterDescriptor> =
            endpoint.parameters_from(ParameterSource::Form).collect();
        if !form_params.is_empty() {
            debug!(route = %endpoint.route, fields = form_params.len(), "form-data request");
            request.form_data = Some(form_fields(self.provider, &form_params));
            set_header(&mut request.headers, CONTENT_TYPE, MULTIPART_MEDIA_TYPE);
            return request;
        }

        if endpoint.has_body_method() {
            let options = SynthesisOptions {
                suppress_unresolved_warnings,
                ..self.options
            };
            self.attach_body(&mut request, endpoint, &options);
        }
        request
    }

    /// URL with path and query parameters filled in; no headers or body.
    fn skeleton(&self, endpoint: &EndpointDescriptor, url_template: String) -> GeneratedRequest {
        let path_params = self.scalars(endpoint, ParameterSource::Path);
        let query_params = self.scalars(endpoint, ParameterSource::Query);

        let mut url = fill_path_params(&url_template, &path_params);
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_string(&query_params));
        }

        GeneratedRequest {
            url,
            method: endpoint.method.to_ascii_uppercase(),
            path_params,
            query_params,
            ..GeneratedRequest::default()
        }
    }

    fn scalars(&self, endpoint: &EndpointDescriptor, source: ParameterSource) -> Map<String, Value> {
        endpoint
            .parameters_from(source)
            .map(|p| (p.name.clone(), self.provider.value_for(&p.type_name, &p.name)))
            .collect()
    }

    fn attach_body(
        &self,
        request: &mut GeneratedRequest,
        endpoint: &EndpointDescriptor,
        options: &SynthesisOptions,
    ) {
        let result = RequestBodySynthesizer::new(self.provider, self.parse_errors)
            .synthesize(&endpoint.parameters, options);
        request.body = result.body;
        request.errors.extend(result.errors);
    }
}

/// Insert a header, replacing any existing one with the same name in any case.
fn set_header(headers: &mut BTreeMap<String, String>, name: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyDescriptor;
    use crate::synth::NoParseErrors;
    use serde_json::json;

    fn assembler(provider: &SampleValueProvider) -> RequestAssembler<'_> {
        RequestAssembler::new(provider, &NoParseErrors, SynthesisOptions::default())
    }

    #[test]
    fn test_base_url_with_path_param() {
        let provider = SampleValueProvider::new();
        let endpoint = EndpointDescriptor::new("GET", "/users/{id}")
            .with_parameter(ParameterDescriptor::new("id", "int", ParameterSource::Path));

        let request = assembler(&provider).assemble_with_base_url(&endpoint, "https://api.example.com/");

        let id = request.url.strip_prefix("https://api.example.com/users/").unwrap();
        let id: i64 = id.parse().unwrap();
        assert!((1..=1000).contains(&id));
        assert_eq!(request.path_params["id"], json!(id));
        assert!(request.body.is_none());
        assert_eq!(request.headers[CONTENT_TYPE], JSON_MEDIA_TYPE);
        assert_eq!(request.headers[ACCEPT], JSON_MEDIA_TYPE);
    }

    #[test]
    fn test_query_string_appended() {
        let provider = SampleValueProvider::new();
        let endpoint = EndpointDescriptor::new("get", "search")
            .with_parameter(ParameterDescriptor::new("email", "string", ParameterSource::Query))
            .with_parameter(ParameterDescriptor::new("active", "bool", ParameterSource::Query));

        let request = assembler(&provider).assemble_with_base_url(&endpoint, "https://h");
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.url,
            "https://h/search?email=user%40example.com&active=true"
        );
        assert_eq!(request.query_params.len(), 2);
    }

    #[test]
    fn test_post_attaches_body_and_warnings() {
        let provider = SampleValueProvider::new();
        let endpoint = EndpointDescriptor::new("POST", "/orders").with_parameter(
            ParameterDescriptor::new("order", "CreateOrder", ParameterSource::Body).with_properties(
                vec![
                    PropertyDescriptor::field("quantity", "int"),
                    PropertyDescriptor::field("shipping", "Address"),
                ],
            ),
        );

        let request = assembler(&provider).assemble_with_base_url(&endpoint, "https://h");
        assert_eq!(request.body, Some(json!({"quantity": 1, "shipping": null})));
        assert_eq!(request.errors.len(), 1);
        assert!(request.wire_errors()[0].starts_with("shipping|"));
    }

    #[test]
    fn test_post_without_parameters() {
        let provider = SampleValueProvider::new();
        let endpoint = EndpointDescriptor::new("POST", "/ping");
        let request = assembler(&provider).assemble_with_base_url(&endpoint, "https://h");
        assert!(request.body.is_none());
        assert!(request.errors.is_empty());
    }

    #[test]
    fn test_environment_url_and_headers() {
        let provider = SampleValueProvider::new();
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let environment = EnvironmentDescriptor {
            base_url: "https://host".to_string(),
            base_path: Some("/v1/".to_string()),
            headers,
        };
        let endpoint = EndpointDescriptor::new("GET", "/api/users");

        let request = assembler(&provider).assemble_with_environment(&endpoint, &environment, false);
        assert_eq!(request.url, "https://host/v1/users");
        assert_eq!(request.headers["Authorization"], "Bearer t");
        assert_eq!(request.headers[CONTENT_TYPE], JSON_MEDIA_TYPE);
        assert!(!request.headers.contains_key("content-type"));
    }

    #[test]
    fn test_environment_form_mode() {
        let provider = SampleValueProvider::new();
        let environment = EnvironmentDescriptor {
            base_url: "https://host".to_string(),
            ..EnvironmentDescriptor::default()
        };
        let endpoint = EndpointDescriptor::new("POST", "/api/files")
            .with_parameter(ParameterDescriptor::new("file", "IFormFile", ParameterSource::Form))
            .with_parameter(ParameterDescriptor::new("title", "string", ParameterSource::Form))
            .with_parameter(ParameterDescriptor::new("meta", "Missing", ParameterSource::Body));

        let request = assembler(&provider).assemble_with_environment(&endpoint, &environment, false);
        assert_eq!(request.url, "https://host/files");
        assert!(request.body.is_none());
        assert!(request.errors.is_empty());
        let form = request.form_data.unwrap();
        assert_eq!(form["file"], json!("[file]"));
        assert_eq!(form["title"], json!("Sample Name"));
        assert_eq!(request.headers[CONTENT_TYPE], MULTIPART_MEDIA_TYPE);
    }

    #[test]
    fn test_environment_preview_suppresses_unresolved() {
        let provider = SampleValueProvider::new();
        let environment = EnvironmentDescriptor {
            base_url: "https://host".to_string(),
            ..EnvironmentDescriptor::default()
        };
        let endpoint = EndpointDescriptor::new("PUT", "/items/{itemId}")
            .with_parameter(ParameterDescriptor::new("itemId", "Guid", ParameterSource::Path))
            .with_parameter(ParameterDescriptor::new("item", "Item", ParameterSource::Body));

        let a = assembler(&provider);
        let preview = a.assemble_with_environment(&endpoint, &environment, true);
        assert!(preview.errors.is_empty());
        assert!(preview.body.is_none());

        let final_mode = a.assemble_with_environment(&endpoint, &environment, false);
        assert_eq!(final_mode.errors.len(), 1);
    }
}
