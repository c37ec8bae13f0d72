//
//  values.rs
//  Sampler
//
//  Heuristic sample values. One ordered table of field-name triggers, then a
//  fallback on the declared type.
//

use rand::Rng;
use serde_json::{json, Value};

use super::types::strip_nullable;

pub const SAMPLE_EMAIL: &str = "user@example.com";
pub const SAMPLE_PASSWORD: &str = "P@ssw0rd123";
pub const SAMPLE_PHONE: &str = "+1-555-0100";
pub const SAMPLE_URL: &str = "https://example.com";
pub const SAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";
pub const SAMPLE_NAME: &str = "Sample Name";
pub const SAMPLE_DESCRIPTION: &str = "This is a sample description.";
pub const SAMPLE_STRING: &str = "sample string";
pub const SAMPLE_INTEGER: i64 = 42;
pub const SAMPLE_FLOAT: f64 = 12.5;
pub const SAMPLE_GUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Inclusive range drawn from for identifier-like fields.
pub const ID_RANGE: std::ops::RangeInclusive<i64> = 1..=1000;

/// What a matching field-name trigger produces.
#[derive(Clone, Copy)]
enum Sample {
    RandomId,
    Text(&'static str),
    Float(f64),
    Integer(i64),
    Flag,
}

/// Substring triggers on the lower-cased field name.
struct NameRule {
    triggers: &'static [&'static str],
    /// Match only at the start of the name.
    prefix: bool,
    sample: Sample,
}

impl NameRule {
    const fn contains(triggers: &'static [&'static str], sample: Sample) -> Self {
        Self {
            triggers,
            prefix: false,
            sample,
        }
    }

    const fn prefix(triggers: &'static [&'static str], sample: Sample) -> Self {
        Self {
            triggers,
            prefix: true,
            sample,
        }
    }

    fn matches(&self, lower: &str) -> bool {
        self.triggers.iter().any(|t| {
            if self.prefix {
                lower.starts_with(t)
            } else {
                lower.contains(t)
            }
        })
    }
}

// Ordered: first match wins.
const NAME_RULES: &[NameRule] = &[
    NameRule::contains(&["id", "identifier"], Sample::RandomId),
    NameRule::contains(&["email", "mail"], Sample::Text(SAMPLE_EMAIL)),
    NameRule::contains(&["password", "pwd"], Sample::Text(SAMPLE_PASSWORD)),
    NameRule::contains(&["phone", "telephone", "mobile"], Sample::Text(SAMPLE_PHONE)),
    NameRule::contains(&["address"], Sample::Text("123 Main St")),
    NameRule::contains(&["city"], Sample::Text("New York")),
    NameRule::contains(&["country"], Sample::Text("USA")),
    NameRule::contains(&["zip", "postal"], Sample::Text("10001")),
    NameRule::contains(&["price", "amount", "cost"], Sample::Float(99.99)),
    NameRule::contains(&["quantity", "count"], Sample::Integer(1)),
    NameRule::contains(&["category"], Sample::Text("General")),
    NameRule::contains(&["url", "link"], Sample::Text(SAMPLE_URL)),
    NameRule::contains(&["date", "time"], Sample::Text(SAMPLE_TIMESTAMP)),
    NameRule::contains(&["name", "title"], Sample::Text(SAMPLE_NAME)),
    NameRule::contains(&["description", "comment"], Sample::Text(SAMPLE_DESCRIPTION)),
    NameRule::contains(&["status"], Sample::Text("active")),
    NameRule::prefix(&["is", "has", "can"], Sample::Flag),
];

const INTEGER_TYPES: &[&str] = &[
    "int", "int16", "int32", "int64", "long", "short", "byte", "sbyte", "uint", "ulong", "ushort",
];

const FLOAT_TYPES: &[&str] = &["double", "float", "decimal"];

/// Maps a field name and/or declared type to a representative JSON scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleValueProvider;

impl SampleValueProvider {
    pub fn new() -> Self {
        Self
    }

    /// Sample value for a field, preferring name heuristics over the type.
    pub fn value_for(&self, type_name: &str, field_name: &str) -> Value {
        self.value_for_name(field_name)
            .unwrap_or_else(|| self.value_for_type(type_name))
    }

    /// Name-based heuristic; `None` when no trigger matches.
    pub fn value_for_name(&self, field_name: &str) -> Option<Value> {
        let lower = field_name.to_lowercase();
        if lower.is_empty() {
            return None;
        }
        NAME_RULES
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| render(rule.sample))
    }

    /// Type-based fallback.
    pub fn value_for_type(&self, type_name: &str) -> Value {
        let lower = strip_nullable(type_name).to_lowercase();
        match lower.as_str() {
            "string" => json!(SAMPLE_STRING),
            t if INTEGER_TYPES.contains(&t) => json!(SAMPLE_INTEGER),
            t if FLOAT_TYPES.contains(&t) => json!(SAMPLE_FLOAT),
            "bool" | "boolean" => json!(true),
            "guid" => json!(SAMPLE_GUID),
            t if t.contains("datetime") => json!(SAMPLE_TIMESTAMP),
            _ => json!(SAMPLE_STRING),
        }
    }
}

fn render(sample: Sample) -> Value {
    match sample {
        Sample::RandomId => json!(rand::thread_rng().gen_range(ID_RANGE)),
        Sample::Text(s) => json!(s),
        Sample::Float(f) => json!(f),
        Sample::Integer(i) => json!(i),
        Sample::Flag => json!(true),
    }
}

/// Render a scalar the way it appears in a URL or form field.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
