//! Convenience extensions: HTML character references and URL helpers.

pub use html_entities::{
    EncodeOptions, EntityTable, TableError, decode_html_entities, encode_html_entities,
};
pub use url_ext as url;
