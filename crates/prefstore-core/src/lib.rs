//! # prefstore-core
//!
//! Typed application-settings registry: declare named preferences with
//! a description, a type tag, and a per-type default; read and write
//! values through typed accessors that never fail; persist the whole
//! set to a single human-editable file and load it back on the next
//! launch.
//!
//! This crate is the shared foundation for every surface that touches
//! preferences (embedding applications, the `prefstore` command-line
//! tool). It is synchronous and single-threaded by design and has no
//! UI or network dependencies.
//!
//! # Architecture
//!
//! - **[`registry`]**: the core contract. A
//!   [`PreferenceCatalog`] holds declare-once metadata, a
//!   [`PreferenceStore`] holds values with typed getters that fall
//!   back to per-type defaults and then zero values.
//!
//! - **[`document`]**: the at-rest representation. Values live in a
//!   flat [`PrefDocument`] keyed by preference name and encode to a
//!   TOML table in which every storage class round-trips exactly.
//!
//! - **[`persist`]**: file adapters. The first-run existence check
//!   plus whole-document read and write with path-carrying errors.
//!
//! - **[`version`]**: self-contained semantic-version utilities. The
//!   lenient [`VersionTriplet`] parser and the [`AppVersion`]
//!   update-check holder.
//!
//! # A complete session
//!
//! ```rust
//! use prefstore_core::{PrefType, PreferenceCatalog, PreferenceStore};
//!
//! // Declare the catalog once at startup.
//! let mut catalog = PreferenceCatalog::new();
//! catalog.register("libraryPath", "Parts library folder", PrefType::FolderPath)?;
//! catalog.register("gridSize", "Grid spacing (px)", PrefType::Integer)?;
//!
//! // Open the store and register defaults.
//! let path = std::env::temp_dir().join(format!("prefstore-demo-{}.prefs", std::process::id()));
//! let mut store = PreferenceStore::open(&path);
//! store.set_default_int("gridSize", 20);
//!
//! assert_eq!(store.get_int("gridSize"), 20); // default until a put
//!
//! store.put_int("gridSize", 32);
//! store.save(&path)?;
//! # std::fs::remove_file(&path).ok();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod persist;
pub mod registry;
pub mod version;

// Re-export the types most callers need, so `use prefstore_core::...`
// works without spelling out the module tree.
pub use document::{decode_document, encode_document, DocumentError, PrefDocument, StoredValue};
pub use persist::{prefs_file_exists, read_document, write_document, PersistError};
pub use registry::{
    CatalogError, PrefDescriptor, PrefType, PreferenceCatalog, PreferenceStore,
};
pub use version::{AppVersion, FixedVersionSource, VersionSource, VersionTriplet};
