//! The at-rest representation of preference values.
//!
//! Two halves:
//!
//! - [`value`] defines what can be stored: the four scalar storage
//!   classes ([`StoredValue`]) and the flat name-to-value map
//!   ([`PrefDocument`]).
//! - [`codec`] turns a document into TOML text and back, with
//!   [`DocumentError`] covering both directions.
//!
//! The registry layer reads and writes documents through
//! [`crate::registry::store::PreferenceStore`]; tools that work on raw
//! files (the CLI, tests) use this module directly.

pub mod codec;
pub mod value;

pub use codec::{decode_document, encode_document, DocumentError};
pub use value::{PrefDocument, StoredValue};
