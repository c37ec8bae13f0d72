//! Sample value generation and type classification.

pub mod types;
pub mod values;

pub use types::{
    element_type, inner_type, is_collection_type, is_complex_type, is_file_type, is_simple_type,
    strip_nullable, FILE_PLACEHOLDER,
};
pub use values::{scalar_text, SampleValueProvider};
