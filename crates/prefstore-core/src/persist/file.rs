//! File-backed persistence for preference documents.
//!
//! Three small adapters between the store and the file system: an
//! existence probe (the first-run check), a read that decodes, and a
//! write that encodes. Each I/O failure is wrapped with the path it
//! happened on, because "permission denied" without a path is useless
//! in a log.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::{decode_document, encode_document, DocumentError, PrefDocument};

/// Errors raised while reading or writing a preferences file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// A file-system operation failed.
    #[error("I/O error on preferences file {path}: {source}")]
    Io {
        /// The file (or directory) the operation touched.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be decoded, or the document could
    /// not be encoded for writing.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Returns `true` when a preferences file exists at `path`.
///
/// This is the first-run check: a store opened against a path for
/// which this returns `false` starts empty and unconfigured. Only
/// regular files count; a directory at the path is not a preferences
/// file.
pub fn prefs_file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Reads and decodes the preferences file at `path`.
///
/// # Errors
///
/// Returns [`PersistError::Io`] when the file cannot be read and
/// [`PersistError::Document`] when its content is not a valid
/// preference document.
pub fn read_document(path: &Path) -> Result<PrefDocument, PersistError> {
    let text = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_document(&text)?)
}

/// Encodes `doc` and writes it to `path`, replacing any existing file.
///
/// Missing parent directories are created first, so a document can be
/// saved into a configuration directory that does not exist yet.
///
/// # Errors
///
/// Returns [`PersistError::Io`] for file-system failures and
/// [`PersistError::Document`] when encoding fails.
pub fn write_document(path: &Path, doc: &PrefDocument) -> Result<(), PersistError> {
    if let Some(dir) = path.parent() {
        // parent() yields Some("") for a bare file name; nothing to create.
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| PersistError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }
    let text = encode_document(doc)?;
    fs::write(path, text).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
