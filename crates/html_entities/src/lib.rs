//! HTML character reference encoding and decoding.
//!
//! Build an [`EntityTable`] once, then pass it by reference to
//! [`decode_html_entities`] and [`encode_html_entities`]:
//!
//! ```
//! # #[cfg(feature = "bundled")] {
//! use html_entities::{EncodeOptions, EntityTable, decode_html_entities, encode_html_entities};
//!
//! let table = EntityTable::bundled().expect("bundled entity table");
//! assert_eq!(decode_html_entities("caf&eacute; &#x2014;", &table), "café —");
//! assert_eq!(
//!     encode_html_entities("café", &table, EncodeOptions::new().prefer_named()),
//!     "caf&eacute;"
//! );
//! # }
//! ```

pub mod perf_fixtures;

mod decode;
mod encode;
mod error;
mod options;
mod table;

pub use crate::decode::decode_html_entities;
pub use crate::encode::{encode_html_entities, needs_escape};
pub use crate::error::TableError;
pub use crate::options::EncodeOptions;
pub use crate::table::EntityTable;
