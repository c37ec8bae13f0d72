//! Request assembly and URL composition.

pub mod assembler;
pub mod url;

pub use assembler::{
    RequestAssembler, ACCEPT, CONTENT_TYPE, JSON_MEDIA_TYPE, MULTIPART_MEDIA_TYPE,
};
pub use url::{encode_component, fill_path_params, join_base_url, join_environment_url, query_string};
