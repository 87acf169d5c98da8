//! Text codec for preference documents.
//!
//! # The on-disk format (for beginners)
//!
//! A preferences file is one flat TOML table, nothing else. TOML was
//! picked because its four scalar shapes line up one-to-one with the
//! four storage classes, so no values are stringified and everything
//! round-trips exactly:
//!
//! ```toml
//! gridEnabled = true
//! gridSize = 20
//! libraryPath = "/home/user/parts"
//! zoomFactor = 1.5
//! ```
//!
//! Decoding rejects anything richer than that (nested tables, arrays,
//! dates): such a file was not written by us, and loading it would put
//! unrepresentable values in the document.
//!
//! Encoding and decoding are pure text transformations; file I/O lives
//! in [`crate::persist`].

use thiserror::Error;

use super::value::PrefDocument;

/// Errors that can occur while encoding or decoding a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not a flat TOML table of scalar values.
    #[error("malformed preference document: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be rendered as TOML.
    #[error("failed to render preference document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Encodes a document as TOML text.
///
/// Output is deterministic: entries appear in key order, so encoding
/// the same document twice yields identical text.
///
/// # Errors
///
/// Returns [`DocumentError::Serialize`] when a value cannot be
/// rendered (which for scalar entries does not happen in practice).
pub fn encode_document(doc: &PrefDocument) -> Result<String, DocumentError> {
    Ok(toml::to_string_pretty(doc)?)
}

/// Decodes TOML text into a document.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] when the text is not valid TOML or
/// contains non-scalar values.
pub fn decode_document(text: &str) -> Result<PrefDocument, DocumentError> {
    Ok(toml::from_str(text)?)
}

// ── Tests ────────────────────────────────────────────────────────────────────
