//
//  types.rs
//  Sampler
//
//  Type-name classification shared by value generation and body synthesis.
//  All checks are case-insensitive and ignore a trailing nullable marker.
//

/// Primitive type names rendered as scalars.
const SIMPLE_TYPES: &[&str] = &[
    "string",
    "int",
    "int16",
    "int32",
    "int64",
    "long",
    "short",
    "byte",
    "sbyte",
    "uint",
    "ulong",
    "ushort",
    "double",
    "float",
    "decimal",
    "bool",
    "boolean",
    "datetime",
    "datetimeoffset",
    "dateonly",
    "timeonly",
    "timespan",
    "guid",
    "char",
    "object",
];

/// Generic wrappers that denote a sequence of their inner type.
const COLLECTION_PREFIXES: &[&str] = &["list<", "ienumerable<", "icollection<", "ilist<", "array<"];

/// Type names that are uploaded files rather than data.
const FILE_TYPES: &[&str] = &["iformfile", "formfile", "httppostedfile", "stream"];

/// Placeholder rendered for file-like fields.
pub const FILE_PLACEHOLDER: &str = "[file]";

/// Drop one trailing `?` nullable marker.
pub fn strip_nullable(type_name: &str) -> &str {
    let trimmed = type_name.trim();
    trimmed.strip_suffix('?').unwrap_or(trimmed).trim_end()
}

fn normalized(type_name: &str) -> String {
    strip_nullable(type_name).to_lowercase()
}

/// True for the closed set of primitive type names (and arrays of them).
pub fn is_simple_type(type_name: &str) -> bool {
    let lower = normalized(type_name);
    if COLLECTION_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    let base = lower.strip_suffix("[]").unwrap_or(&lower);
    let base = base.strip_suffix('?').unwrap_or(base);
    SIMPLE_TYPES.contains(&base)
}

/// True for generic list wrappers, `T[]`, and `Array<T>`.
pub fn is_collection_type(type_name: &str) -> bool {
    let lower = normalized(type_name);
    lower.ends_with("[]") || COLLECTION_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Neither primitive nor collection: a class that needs a property tree.
pub fn is_complex_type(type_name: &str) -> bool {
    !is_simple_type(type_name) && !is_collection_type(type_name)
}

/// True if the type names an uploaded file.
pub fn is_file_type(type_name: &str) -> bool {
    let lower = type_name.to_lowercase();
    FILE_TYPES.iter().any(|f| lower.contains(f))
}

/// Content between the first `<` and its matching `>`, trimmed.
pub fn inner_type(type_name: &str) -> Option<&str> {
    let start = type_name.find('<')?;
    let mut depth = 0usize;
    for (offset, c) in type_name[start..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(type_name[start + 1..start + offset].trim());
                }
            }
            _ => {}
        }
    }
    None
}

/// Element type of a collection type; the type itself otherwise.
pub fn element_type(type_name: &str) -> &str {
    let stripped = strip_nullable(type_name);
    if let Some(inner) = inner_type(stripped) {
        return inner;
    }
    stripped.strip_suffix("[]").unwrap_or(stripped).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_types() {
        assert!(is_simple_type("string"));
        assert!(is_simple_type("Int32"));
        assert!(is_simple_type("decimal?"));
        assert!(is_simple_type("Guid"));
        assert!(is_simple_type("int[]"));
        assert!(!is_simple_type("List<string>"));
        assert!(!is_simple_type("Address"));
    }

    #[test]
    fn test_collection_types() {
        assert!(is_collection_type("List<OrderItem>"));
        assert!(is_collection_type("IEnumerable<int>?"));
        assert!(is_collection_type("ICollection<Tag>"));
        assert!(is_collection_type("IList<Tag>"));
        assert!(is_collection_type("Tag[]"));
        assert!(is_collection_type("Array<string>"));
        assert!(!is_collection_type("Dictionary<string, int>"));
        assert!(!is_collection_type("string"));
    }

    #[test]
    fn test_complex_types() {
        assert!(is_complex_type("Address"));
        assert!(is_complex_type("Address?"));
        assert!(!is_complex_type("string"));
        assert!(!is_complex_type("List<Address>"));
    }

    #[test]
    fn test_inner_and_element_type() {
        assert_eq!(inner_type("List< OrderItem >"), Some("OrderItem"));
        assert_eq!(inner_type("List<List<int>>"), Some("List<int>"));
        assert_eq!(inner_type("string"), None);
        assert_eq!(element_type("Tag[]"), "Tag");
        assert_eq!(element_type("IEnumerable<Tag>?"), "Tag");
        assert_eq!(element_type("Address"), "Address");
    }

    #[test]
    fn test_file_types() {
        assert!(is_file_type("IFormFile"));
        assert!(is_file_type("IFormFileCollection"));
        assert!(is_file_type("Stream"));
        assert!(!is_file_type("string"));
    }

    #[test]
    fn test_strip_nullable() {
        assert_eq!(strip_nullable("int?"), "int");
        assert_eq!(strip_nullable(" Guid? "), "Guid");
        assert_eq!(strip_nullable("string"), "string");
    }
}
