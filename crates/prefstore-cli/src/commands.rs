//! Implementations of the CLI subcommands.
//!
//! Each command is a plain function over parsed values that returns
//! the text it would print, so behaviour is covered by ordinary unit
//! tests without spawning the binary. `main.rs` owns argument parsing
//! and actual output.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::debug;

use prefstore_core::{
    prefs_file_exists, read_document, write_document, PrefDocument, StoredValue, VersionTriplet,
};

/// A storage class the user can force with `set --type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Bool,
    Int,
    Float,
}

impl ValueKind {
    /// Parses `raw` as this storage class.
    ///
    /// # Errors
    ///
    /// Fails when `raw` is not a literal of the class, e.g.
    /// `--type int maybe`.
    pub fn parse_value(self, raw: &str) -> anyhow::Result<StoredValue> {
        let value = match self {
            ValueKind::Text => StoredValue::Text(raw.to_string()),
            ValueKind::Bool => StoredValue::Boolean(
                raw.parse()
                    .with_context(|| format!("not a boolean: {raw:?}"))?,
            ),
            ValueKind::Int => StoredValue::Integer(
                raw.parse()
                    .with_context(|| format!("not an integer: {raw:?}"))?,
            ),
            ValueKind::Float => StoredValue::Float(
                raw.parse()
                    .with_context(|| format!("not a float: {raw:?}"))?,
            ),
        };
        Ok(value)
    }
}

/// Infers the storage class of a raw command-line value.
///
/// Classes are tried narrowest first: boolean, integer, float, then
/// text, which always matches. `set --type` overrides the inference
/// when, say, the literal text `"true"` is wanted.
pub fn infer_value(raw: &str) -> StoredValue {
    if let Ok(flag) = raw.parse::<bool>() {
        return StoredValue::Boolean(flag);
    }
    if let Ok(number) = raw.parse::<i64>() {
        return StoredValue::Integer(number);
    }
    if let Ok(number) = raw.parse::<f64>() {
        return StoredValue::Float(number);
    }
    StoredValue::Text(raw.to_string())
}

/// Lists every entry in the preferences file at `path`.
///
/// One line per key, `<key> (<type>) = <value>`, in key order. Text
/// values are quoted so an empty string is visible. A missing file
/// lists as empty rather than failing, matching the first-run
/// behaviour of the store.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or decoded.
pub fn show(path: &Path) -> anyhow::Result<String> {
    let doc = load_or_empty(path)?;
    let mut out = String::new();
    for (key, value) in doc.iter() {
        writeln!(out, "{key} ({}) = {}", value.type_name(), render_value(value))?;
    }
    Ok(out)
}

/// Returns the value stored under `key`, raw and unquoted, for use in
/// scripts.
///
/// # Errors
///
/// Fails when the file cannot be loaded or when `key` holds no value.
pub fn get(path: &Path, key: &str) -> anyhow::Result<String> {
    let doc = load_or_empty(path)?;
    match doc.get(key) {
        Some(value) => Ok(value.to_string()),
        None => bail!("no value stored under key: {key}"),
    }
}

/// Stores `value` under `key` in the file at `path`, creating the file
/// if needed.
///
/// Every other entry is preserved; only the one key is inserted or
/// replaced. A corrupted existing file makes the command fail instead
/// of silently clobbering whatever the user had.
///
/// # Errors
///
/// Fails when an existing file cannot be loaded or the updated file
/// cannot be written.
pub fn set(path: &Path, key: &str, value: StoredValue) -> anyhow::Result<()> {
    let mut doc = load_or_empty(path)?;
    doc.insert(key, value);
    write_document(path, &doc)
        .with_context(|| format!("cannot save preferences to {}", path.display()))?;
    debug!("stored {key} in {}", path.display());
    Ok(())
}

/// Compares two version strings and describes how the first orders
/// against the second.
///
/// Both sides go through the lenient parser, so the output shows the
/// canonical triplets actually compared: `compare 1.4 1.2.9` prints
/// `1.4.0 is newer than 1.2.9`.
pub fn compare(candidate: &str, baseline: &str) -> String {
    let left = VersionTriplet::parse(candidate);
    let right = VersionTriplet::parse(baseline);
    let relation = match left.cmp(&right) {
        Ordering::Less => "older than",
        Ordering::Equal => "equal to",
        Ordering::Greater => "newer than",
    };
    format!("{left} is {relation} {right}")
}

fn load_or_empty(path: &Path) -> anyhow::Result<PrefDocument> {
    if !prefs_file_exists(path) {
        debug!("no preferences file at {}; treating as empty", path.display());
        return Ok(PrefDocument::new());
    }
    read_document(path).with_context(|| format!("cannot load preferences from {}", path.display()))
}

/// Renders a value for a listing: text quoted, scalars bare.
fn render_value(value: &StoredValue) -> String {
    match value {
        StoredValue::Text(text) => format!("{text:?}"),
        other => other.to_string(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
