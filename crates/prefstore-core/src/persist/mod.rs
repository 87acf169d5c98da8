//! Persistence adapters.
//!
//! Everything that touches the file system lives behind this module,
//! so the registry and document layers stay pure and trivially
//! testable. The adapters work on whole documents; there is no partial
//! or incremental I/O, a preferences file is always read and written
//! in one piece.

pub mod file;

pub use file::{prefs_file_exists, read_document, write_document, PersistError};
