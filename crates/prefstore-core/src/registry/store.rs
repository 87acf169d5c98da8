//! The preference value store: typed reads with default fallback,
//! unchecked typed writes, an explicit open/save lifecycle.
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//!   startup                    session                   shutdown
//!   ───────────────────────    ──────────────────────    ─────────────────
//!   open(path)                 get_* / put_*             save(path)?
//!     file there + valid?        reads fall back to        only explicit
//!     -> values loaded           defaults, then zero       saves hit disk
//!     file bad or missing?       writes replace
//!     -> empty, unconfigured     unconditionally
//! ```
//!
//! Opening never fails and reading never fails; the only fallible
//! operation in the whole lifecycle is [`PreferenceStore::save`].
//! The asymmetry is deliberate. A corrupted preferences file must not
//! take the application down at startup (the user loses settings, not
//! the program), but silently losing settings at shutdown would be
//! worse, so save failures are surfaced to the caller.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::{PrefDocument, StoredValue};
use crate::persist::{self, PersistError};

/// Runtime preference values for one application.
///
/// The store is an explicit instance: create one with [`open`] (or
/// [`open_for_app`]) at startup, pass it by reference, and call
/// [`save`] before exit. Nothing is flushed implicitly.
///
/// A typed read resolves in three steps: the stored value when one of
/// the matching storage class is present, else the registered default
/// for that type, else the type's zero value (`""`, `false`, `0`,
/// `0.0`). Reads therefore never fail; an absent key is a normal
/// state, not an error.
///
/// # Type agreement is a caller contract
///
/// The store never consults a
/// [`PreferenceCatalog`](crate::registry::catalog::PreferenceCatalog):
/// `put_int` on a key declared as text is accepted and stored as an
/// integer. Keeping writes unchecked is deliberate, long-standing
/// caller code depends on it. The flip side is that a value stored
/// under one class is invisible to the other typed getters, which fall
/// through to their default. Read each key with the getter matching
/// its declared type.
///
/// [`open`]: Self::open
/// [`open_for_app`]: Self::open_for_app
/// [`save`]: Self::save
#[derive(Debug, Default)]
pub struct PreferenceStore {
    /// Persisted values, exactly as loaded or put.
    values: PrefDocument,
    /// Per-type default maps. Independent of `values` and of each
    /// other: a key may carry defaults of several types, and a typed
    /// getter consults only its own map.
    default_strings: HashMap<String, String>,
    default_bools: HashMap<String, bool>,
    default_ints: HashMap<String, i64>,
    default_floats: HashMap<String, f64>,
    /// True only when a preferences file existed and loaded cleanly.
    configured: bool,
}

impl PreferenceStore {
    /// Opens a store backed by the file at `path`. Never fails.
    ///
    /// Three outcomes:
    ///
    /// - the file exists and decodes: its values are loaded and
    ///   [`is_configured`] reports `true`;
    /// - the file exists but cannot be read or decoded: the failure is
    ///   logged and the store starts empty and unconfigured;
    /// - no file: first run, the store starts empty and unconfigured.
    ///
    /// [`is_configured`]: Self::is_configured
    pub fn open(path: &Path) -> Self {
        if !persist::prefs_file_exists(path) {
            debug!("no preferences file at {}; starting unconfigured", path.display());
            return Self::default();
        }
        match persist::read_document(path) {
            Ok(values) => {
                debug!("loaded {} preference(s) from {}", values.len(), path.display());
                Self {
                    values,
                    configured: true,
                    ..Self::default()
                }
            }
            Err(e) => {
                warn!("failed to load preferences from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Opens the conventional preferences file for an application
    /// identity (see [`default_path`](Self::default_path)).
    pub fn open_for_app(identity: &str) -> Self {
        Self::open(&Self::default_path(identity))
    }

    /// The conventional preferences file for an application identity:
    /// `<identity>.prefs`, relative to the working directory.
    pub fn default_path(identity: &str) -> PathBuf {
        PathBuf::from(format!("{identity}.prefs"))
    }

    /// Reports whether a prior session's file was found and loaded.
    ///
    /// `false` means first run, or a corrupted file that was
    /// discarded. Applications use this to seed initial values or run
    /// a first-time setup flow.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    // ── Defaults ─────────────────────────────────────────────────────────────

    /// Registers the fallback [`get_string`](Self::get_string) returns
    /// when `key` holds no text value.
    pub fn set_default_string(&mut self, key: &str, value: impl Into<String>) {
        self.default_strings.insert(key.to_string(), value.into());
    }

    /// Registers the fallback [`get_bool`](Self::get_bool) returns
    /// when `key` holds no boolean value.
    pub fn set_default_bool(&mut self, key: &str, value: bool) {
        self.default_bools.insert(key.to_string(), value);
    }

    /// Registers the fallback [`get_int`](Self::get_int) returns when
    /// `key` holds no integer value.
    pub fn set_default_int(&mut self, key: &str, value: i64) {
        self.default_ints.insert(key.to_string(), value);
    }

    /// Registers the fallback [`get_float`](Self::get_float) returns
    /// when `key` holds no float value.
    pub fn set_default_float(&mut self, key: &str, value: f64) {
        self.default_floats.insert(key.to_string(), value);
    }

    // ── Typed reads ──────────────────────────────────────────────────────────

    /// Returns the text value of `key`, falling back to the registered
    /// string default and then `""`. Never fails.
    ///
    /// A value stored under another storage class counts as absent.
    pub fn get_string(&self, key: &str) -> String {
        self.values
            .get(key)
            .and_then(StoredValue::as_str)
            .map(str::to_string)
            .or_else(|| self.default_strings.get(key).cloned())
            .unwrap_or_default()
    }

    /// Returns the boolean value of `key`, falling back to the
    /// registered boolean default and then `false`. Never fails.
    pub fn get_bool(&self, key: &str) -> bool {
        self.values
            .get(key)
            .and_then(StoredValue::as_bool)
            .or_else(|| self.default_bools.get(key).copied())
            .unwrap_or(false)
    }

    /// Returns the integer value of `key`, falling back to the
    /// registered integer default and then `0`. Never fails.
    pub fn get_int(&self, key: &str) -> i64 {
        self.values
            .get(key)
            .and_then(StoredValue::as_int)
            .or_else(|| self.default_ints.get(key).copied())
            .unwrap_or(0)
    }

    /// Returns the float value of `key`, falling back to the
    /// registered float default and then `0.0`. Never fails.
    pub fn get_float(&self, key: &str) -> f64 {
        self.values
            .get(key)
            .and_then(StoredValue::as_float)
            .or_else(|| self.default_floats.get(key).copied())
            .unwrap_or(0.0)
    }

    // ── Unchecked writes ─────────────────────────────────────────────────────

    /// Stores a text value under `key`, inserting or replacing.
    ///
    /// No catalog lookup, no type validation; see the type-agreement
    /// contract in the type-level docs.
    pub fn put_string(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key, StoredValue::Text(value.into()));
    }

    /// Stores a boolean value under `key`, inserting or replacing.
    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key, StoredValue::Boolean(value));
    }

    /// Stores an integer value under `key`, inserting or replacing.
    pub fn put_int(&mut self, key: &str, value: i64) {
        self.values.insert(key, StoredValue::Integer(value));
    }

    /// Stores a float value under `key`, inserting or replacing.
    pub fn put_float(&mut self, key: &str, value: f64) {
        self.values.insert(key, StoredValue::Float(value));
    }

    // ── Persistence ──────────────────────────────────────────────────────────

    /// Writes the current values to `path`, replacing any existing
    /// file.
    ///
    /// Defaults are not written; only values that were loaded or put
    /// reach the file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the document cannot be encoded or
    /// the file cannot be written. Unlike load failures, save failures
    /// are the caller's to handle: retry, pick another location, or
    /// tell the user their settings were not kept.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persist::write_document(path, &self.values)?;
        debug!("saved {} preference(s) to {}", self.values.len(), path.display());
        Ok(())
    }

    /// Read-only view of the underlying document.
    pub fn values(&self) -> &PrefDocument {
        &self.values
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
