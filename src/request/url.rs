//
//  url.rs
//  Sampler
//
//  URL composition: base URL joining, route placeholders, query strings.
//

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value};

use crate::model::EnvironmentDescriptor;
use crate::sample::scalar_text;

/// Everything except unreserved characters gets encoded.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment, query key or query value.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string()
}

/// `base_url` without its trailing slash plus `route` with a leading one.
pub fn join_base_url(base_url: &str, route: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    if route.starts_with('/') {
        format!("{}{}", base, route)
    } else {
        format!("{}/{}", base, route)
    }
}

/// Join environment base URL, base path and route.
///
/// A leading `api/` on the route is dropped: the base path already names
/// the API root.
pub fn join_environment_url(environment: &EnvironmentDescriptor, route: &str) -> String {
    let base = environment
        .base_url
        .strip_suffix('/')
        .unwrap_or(&environment.base_url);

    let base_path = environment.base_path.as_deref().unwrap_or("").trim();
    let base_path = base_path.strip_prefix('/').unwrap_or(base_path);
    let base_path = if base_path.is_empty() || base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{}/", base_path)
    };

    let route = route.strip_prefix('/').unwrap_or(route);
    let route = match route.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("api/") => &route[4..],
        _ => route,
    };
    let route = route.strip_prefix('/').unwrap_or(route);

    format!("{}/{}{}", base, base_path, route)
}

/// Replace `{name}` placeholders (also `{name?}` and `{name:constraint}`)
/// with encoded values. Unknown placeholders are left untouched.
pub fn fill_path_params(route: &str, values: &Map<String, Value>) -> String {
    let mut result = String::with_capacity(route.len());
    let mut rest = route;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|c| open + c) else {
            break;
        };
        result.push_str(&rest[..open]);

        let token = &rest[open + 1..close];
        let name = token
            .split(|c| c == ':' || c == '?' || c == '=')
            .next()
            .unwrap_or(token)
            .trim();
        match values.get(name) {
            Some(value) => result.push_str(&encode_component(&scalar_text(value))),
            None => result.push_str(&rest[open..=close]),
        }
        rest = &rest[close + 1..];
    }

    result.push_str(rest);
    result
}

/// `key=value` pairs joined by `&`, both sides percent-encoded.
pub fn query_string(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key),
                encode_component(&scalar_text(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(base_url: &str, base_path: Option<&str>) -> EnvironmentDescriptor {
        EnvironmentDescriptor {
            base_url: base_url.to_string(),
            base_path: base_path.map(str::to_string),
            ..EnvironmentDescriptor::default()
        }
    }

    #[test]
    fn test_join_base_url() {
        assert_eq!(
            join_base_url("https://api.example.com/", "/users"),
            "https://api.example.com/users"
        );
        assert_eq!(
            join_base_url("https://api.example.com", "users"),
            "https://api.example.com/users"
        );
    }

    #[test]
    fn test_join_environment_url() {
        assert_eq!(
            join_environment_url(&env("https://host", Some("/v1/")), "/api/users"),
            "https://host/v1/users"
        );
        assert_eq!(
            join_environment_url(&env("https://host/", Some("v1")), "orders/{id}"),
            "https://host/v1/orders/{id}"
        );
        assert_eq!(
            join_environment_url(&env("https://host", None), "/Api/users"),
            "https://host/users"
        );
        assert_eq!(
            join_environment_url(&env("https://host", None), "/apiary"),
            "https://host/apiary"
        );
        assert_eq!(join_environment_url(&env("https://host", None), "/"), "https://host/");
    }

    #[test]
    fn test_fill_path_params() {
        let mut values = Map::new();
        values.insert("id".to_string(), json!(7));
        values.insert("slug".to_string(), json!("a b/c"));

        assert_eq!(fill_path_params("/users/{id}", &values), "/users/7");
        assert_eq!(
            fill_path_params("/posts/{slug}/{id:int}", &values),
            "/posts/a%20b%2Fc/7"
        );
        assert_eq!(fill_path_params("/x/{other}/{id?}", &values), "/x/{other}/7");
        assert_eq!(fill_path_params("/broken/{id", &values), "/broken/{id");
    }

    #[test]
    fn test_query_string() {
        let mut params = Map::new();
        params.insert("email".to_string(), json!("user@example.com"));
        params.insert("page size".to_string(), json!(42));
        assert_eq!(query_string(&params), "email=user%40example.com&page%20size=42");
        assert_eq!(query_string(&Map::new()), "");
    }
}
