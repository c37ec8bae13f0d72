//
//  warnings.rs
//  Sampler
//
//  Message and remediation templates for structured synthesis warnings.
//

use crate::model::SynthesisWarning;

/// Parser messages containing this phrase get the "add the type" remediation.
const NOT_FOUND_PHRASE: &str = "not found in workspace";

fn not_found_remediation(type_name: &str) -> String {
    format!(
        "Make sure '{}' is declared in a file inside the open workspace",
        type_name
    )
}

fn generic_remediation(type_name: &str) -> String {
    format!(
        "Check the declaration of '{}' for syntax errors and save the file",
        type_name
    )
}

/// A nested field whose class has no resolved properties.
pub fn unresolved_field(field: &str, type_name: &str) -> SynthesisWarning {
    SynthesisWarning::for_field(
        field,
        format!("Type '{}' not found in workspace", type_name),
        not_found_remediation(type_name),
    )
}

/// A collection field whose element class has no resolved properties.
pub fn unresolved_element(field: &str, element_type: &str) -> SynthesisWarning {
    SynthesisWarning::for_field(
        field,
        format!("Element type '{}' not found in workspace", element_type),
        not_found_remediation(element_type),
    )
}

/// The body parameter's own class has no resolved properties.
pub fn unresolved_body(parameter: &str, type_name: &str) -> SynthesisWarning {
    SynthesisWarning::for_class(
        format!(
            "Type '{}' of body parameter '{}' not found in workspace",
            type_name, parameter
        ),
        not_found_remediation(type_name),
    )
}

/// Expansion stopped at a self-referencing or overly deep type.
pub fn recursion_limit(field: &str, type_name: &str) -> SynthesisWarning {
    SynthesisWarning::for_field(
        field,
        format!(
            "Type '{}' refers back to itself or is nested too deeply; expansion stopped",
            type_name
        ),
        format!("Fill in a sample for '{}' by hand", type_name),
    )
}

/// The body class inherits from a base class the parser could not resolve.
pub fn base_class(note: &str) -> SynthesisWarning {
    SynthesisWarning::for_class(
        note,
        "Open the file declaring the base class so its properties are included",
    )
}

/// Reformat a parser error recorded for `type_name`.
pub fn from_parse_error(type_name: &str, error: &str) -> SynthesisWarning {
    let remediation = if error.contains(NOT_FOUND_PHRASE) {
        not_found_remediation(type_name)
    } else {
        generic_remediation(type_name)
    };
    SynthesisWarning::for_class(error, remediation)
}
