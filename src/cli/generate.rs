//! Command implementations: generate, sample, config.
//!
//! Output goes to stdout as JSON (or TOML for `config`) so it can be piped.

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use crate::config::SamplerConfig;
use crate::model::{read_classes, read_endpoint, read_environment, GeneratedRequest};
use crate::Sampler;

/// Options for the generate command.
pub struct GenerateArgs<'a> {
    pub endpoint: &'a Path,
    pub base_url: Option<&'a str>,
    pub environment: Option<&'a Path>,
    pub classes: Option<&'a Path>,
    pub preview: bool,
    pub wire: bool,
}

/// Build a sample request and render it as pretty JSON.
pub fn generate(config: SamplerConfig, args: &GenerateArgs<'_>) -> Result<String> {
    let sampler = Sampler::with_config(config);

    if let Some(path) = args.classes {
        let classes = read_classes(path)
            .with_context(|| format!("Failed to read classes from {}", path.display()))?;
        let count = sampler.load_classes(classes);
        tracing::debug!(count, "loaded class definitions");
    }

    let endpoint = read_endpoint(args.endpoint)
        .with_context(|| format!("Failed to read endpoint from {}", args.endpoint.display()))?;

    let request = match (args.environment, args.base_url) {
        (Some(path), _) => {
            let environment = read_environment(path)
                .with_context(|| format!("Failed to read environment from {}", path.display()))?;
            sampler.generate_for_environment(&endpoint, &environment, args.preview)
        }
        (None, Some(base_url)) => sampler.generate(&endpoint, base_url),
        (None, None) => anyhow::bail!("Either --base-url or --environment is required"),
    };

    render(&request, args.wire)
}

fn render(request: &GeneratedRequest, wire: bool) -> Result<String> {
    let value = if wire {
        let mut value = serde_json::to_value(request)?;
        value["errors"] = json!(request.wire_errors());
        value
    } else {
        serde_json::to_value(request)?
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Sample value for a type and optional field name, as JSON.
pub fn sample(type_name: &str, field: Option<&str>) -> String {
    Sampler::new()
        .sample_value(type_name, field.unwrap_or(""))
        .to_string()
}

/// Effective configuration as TOML.
pub fn show_config(config: &SamplerConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to render config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_with_base_url() {
        let dir = tempdir().unwrap();
        let endpoint = dir.path().join("endpoint.json");
        std::fs::write(
            &endpoint,
            r#"{"method":"POST","route":"/items","parameters":[
                {"name":"item","type":"Item","source":"body","properties":[
                    {"name":"price","type":"decimal"},
                    {"name":"owner","type":"Person"}]}]}"#,
        )
        .unwrap();

        let args = GenerateArgs {
            endpoint: &endpoint,
            base_url: Some("https://h/"),
            environment: None,
            classes: None,
            preview: false,
            wire: true,
        };
        let output = generate(SamplerConfig::default(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["url"], "https://h/items");
        assert_eq!(value["body"]["price"], 99.99);
        assert!(value["errors"][0].as_str().unwrap().starts_with("owner|"));
    }

    #[test]
    fn test_generate_with_environment_and_classes() {
        let dir = tempdir().unwrap();
        let endpoint = dir.path().join("endpoint.json");
        let environment = dir.path().join("env.json");
        let classes = dir.path().join("classes.json");
        std::fs::write(
            &endpoint,
            r#"{"method":"PUT","route":"/api/items","parameters":[
                {"name":"item","type":"Item","source":"body"}]}"#,
        )
        .unwrap();
        std::fs::write(
            &environment,
            r#"{"base_url":"https://host","base_path":"/v2/","headers":{"X-Key":"k"}}"#,
        )
        .unwrap();
        std::fs::write(
            &classes,
            r#"[{"type_name":"Item","source_file":"Item.cs",
                 "properties":[{"name":"status","type":"string"}]}]"#,
        )
        .unwrap();

        let args = GenerateArgs {
            endpoint: &endpoint,
            base_url: None,
            environment: Some(&environment),
            classes: Some(&classes),
            preview: false,
            wire: false,
        };
        let output = generate(SamplerConfig::default(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["url"], "https://host/v2/items");
        assert_eq!(value["headers"]["X-Key"], "k");
        assert_eq!(value["body"]["status"], "active");
        assert_eq!(value["errors"], json!([]));
    }

    #[test]
    fn test_generate_missing_endpoint_file() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            endpoint: &dir.path().join("missing.json"),
            base_url: Some("https://h"),
            environment: None,
            classes: None,
            preview: false,
            wire: false,
        };
        assert!(generate(SamplerConfig::default(), &args).is_err());
    }

    #[test]
    fn test_sample_and_config() {
        assert_eq!(sample("bool", None), "true");
        assert_eq!(sample("string", Some("userEmail")), "\"user@example.com\"");
        assert!(show_config(&SamplerConfig::default())
            .unwrap()
            .contains("capacity = 100"));
    }
}
