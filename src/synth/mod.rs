//! Request body synthesis.
//!
//! Walks a body parameter's property tree (or a flat parameter list) and
//! produces a JSON-shaped body plus structured warnings for anything that
//! could not be resolved.

pub mod body;
pub mod form;
pub mod warnings;

use std::collections::HashMap;

pub use body::{RequestBodySynthesizer, SynthesisOptions, SynthesisResult, DEFAULT_MAX_DEPTH};
pub use form::{flat_object, form_fields};

/// Parser errors recorded for types that failed to resolve.
pub trait ParseErrorSource {
    /// Errors recorded for `type_name`, or `None` when nothing is known.
    fn parse_errors(&self, type_name: &str) -> Option<Vec<String>>;
}

/// A source that never knows of any parse errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParseErrors;

impl ParseErrorSource for NoParseErrors {
    fn parse_errors(&self, _type_name: &str) -> Option<Vec<String>> {
        None
    }
}

impl ParseErrorSource for HashMap<String, Vec<String>> {
    fn parse_errors(&self, type_name: &str) -> Option<Vec<String>> {
        self.get(type_name).cloned()
    }
}
