//! The preference registry: declared metadata and runtime values.
//!
//! The two halves are intentionally independent:
//!
//! - [`PreferenceCatalog`] is declare-once metadata (name, label, type
//!   tag, visibility) that an editor or documentation surface reads;
//! - [`PreferenceStore`] is the actual values, with typed getters that
//!   never fail and an explicit open/save lifecycle.
//!
//! The store does not validate against the catalog. An application
//! that wants type agreement gets it by declaring keys in the catalog
//! and then only using the matching typed accessors; nothing in the
//! store enforces that discipline at runtime.

pub mod catalog;
pub mod store;

pub use catalog::{CatalogError, PrefDescriptor, PrefType, PreferenceCatalog};
pub use store::PreferenceStore;
